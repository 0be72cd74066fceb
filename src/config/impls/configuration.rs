use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use std::thread::available_parallelism;
use regex::Regex;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::enums::history_key_format::HistoryKeyFormat;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::config::structs::sentry_config::SentryConfig;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            stats_password: String::from("opensaysame"),
            http_server: HttpServerConfig {
                bind_address: String::from("0.0.0.0:3000"),
                real_ip: String::new(),
                keep_alive: 60,
                request_timeout: 15,
                disconnect_timeout: 15,
                threads: available_parallelism().map(|threads| threads.get() as u64).unwrap_or(1)
            },
            database: DatabaseConfig {
                path: String::from("viewCounter.db"),
                bucket: String::from("historicData"),
                persistent_interval: 60,
                history_key: HistoryKeyFormat::day_year
            },
            sentry_config: SentryConfig {
                enabled: false,
                dsn: String::new(),
                debug: false,
                sample_rate: 1.0,
                max_breadcrumbs: 100,
                attach_stacktrace: true,
                send_default_pii: false,
                traces_sample_rate: 0.0
            }
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => Ok(cfg),
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn save_from_config(config: &Configuration, path: &str) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new("will not create automatically the config file"));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(&Configuration::init(), path) {
                    Ok(_) => {
                        eprintln!("Please edit {path} and start the counter again, exiting now...");
                        Err(CustomError::new("created the config file"))
                    }
                    Err(e) => {
                        eprintln!("{path} could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new("could not create the config file"))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        if let Err(error) = config.validate() {
            eprintln!("{error}");
            return Err(CustomError::new("configuration did not validate"));
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if parse_log_level(self.log_level.as_str()).is_none() {
            return Err(ConfigurationError::ValidationError(format!("Unknown log level encountered: '{}'", self.log_level)));
        }

        let check_map = vec![
            ("[DATABASE] Bucket", self.database.bucket.clone(), r"^[A-Za-z_][A-Za-z0-9_]{0,62}$"),
            ("[DATABASE] Path", self.database.path.clone(), r"^\S.*$"),
            ("[STATS] Password", self.stats_password.clone(), r"^\S+$"),
            ("[HTTP] Real IP header", self.http_server.real_ip.clone(), r"^([A-Za-z0-9-]+)?$"),
        ];

        for (name, value, regex) in check_map {
            Self::validate_value(name, value.as_str(), regex)?;
        }

        if self.http_server.bind_address.parse::<SocketAddr>().is_err() {
            return Err(ConfigurationError::ValidationError(format!("[HTTP] Bind address \"{}\" is not a valid socket address", self.http_server.bind_address)));
        }
        if self.database.persistent_interval == 0 {
            return Err(ConfigurationError::ValidationError(String::from("[DATABASE] Persistent interval must be at least 1 second")));
        }
        if self.http_server.threads == 0 {
            return Err(ConfigurationError::ValidationError(String::from("[HTTP] Threads must be at least 1")));
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError>
    {
        let regex_check = Regex::new(regex).map_err(|e| ConfigurationError::ValidationError(e.to_string()))?;
        if !regex_check.is_match(value) {
            return Err(ConfigurationError::ValidationError(format!("Error checking {} [:] Name: \"{}\" [:] Regex: \"{}\"", name, value, regex_check)));
        }
        Ok(())
    }
}
