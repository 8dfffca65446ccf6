use std::env;

#[derive(Debug, Clone)]
pub struct Config {
	pub host: String,
	pub port: u16,
	pub expose_sample_numbers: bool,
	pub contact_phone: String,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 8080,
			expose_sample_numbers: true,
			contact_phone: "0819 3141 8884".to_string(),
		}
	}
}

impl Config {
	pub fn from_env() -> Result<Self, ConfigError> {
		// Load .env file if it exists
		let _ = dotenvy::dotenv();

		Self::from_vars(|key| env::var(key).ok())
	}

	/// Builds the configuration from an arbitrary variable source.
	pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let defaults = Self::default();

		Ok(Self {
			host: var("HOST").unwrap_or(defaults.host),
			port: match var("PORT") {
				Some(port) => port.trim().parse().map_err(|_| ConfigError::InvalidPort)?,
				None => defaults.port,
			},
			expose_sample_numbers: match var("EXPOSE_SAMPLE_NUMBERS") {
				Some(flag) => parse_flag(&flag)
					.ok_or_else(|| ConfigError::InvalidFlag("EXPOSE_SAMPLE_NUMBERS".to_string()))?,
				None => defaults.expose_sample_numbers,
			},
			contact_phone: var("CONTACT_PHONE").unwrap_or(defaults.contact_phone),
		})
	}

	pub fn server_addr(&self) -> String {
		format!("{}:{}", self.host, self.port)
	}
}

fn parse_flag(value: &str) -> Option<bool> {
	match value.trim().to_ascii_lowercase().as_str() {
		"1" | "true" | "yes" | "on" => Some(true),
		"0" | "false" | "no" | "off" => Some(false),
		_ => None,
	}
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("Invalid port number")]
	InvalidPort,
	#[error("Invalid boolean value for {0}")]
	InvalidFlag(String),
}
