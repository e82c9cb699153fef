use super::Config;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(port_str) =
            std::env::var("TENKI_GATEWAY_PORT").or_else(|_| std::env::var("PORT"))
            && let Ok(port) = port_str.parse::<u16>()
        {
            self.gateway.port = port;
        }

        if let Ok(host) = std::env::var("TENKI_GATEWAY_HOST").or_else(|_| std::env::var("HOST"))
            && !host.is_empty()
        {
            self.gateway.host = host;
        }

        if let Ok(endpoint) = std::env::var("TENKI_WEATHER_ENDPOINT")
            && !endpoint.is_empty()
        {
            self.weather.endpoint = endpoint;
        }

        if let Ok(location_id) = std::env::var("TENKI_LOCATION_ID")
            && !location_id.is_empty()
        {
            self.weather.location_id = location_id;
        }

        if let Ok(secret_file) = std::env::var("TENKI_SECRET_FILE")
            && !secret_file.is_empty()
        {
            self.weather.secret_file = secret_file;
        }
    }
}
