mod core;
mod gateway;
mod speech;
mod weather;

pub use self::core::Config;
pub use gateway::GatewayConfig;
pub use speech::SpeechConfig;
pub use weather::WeatherConfig;
