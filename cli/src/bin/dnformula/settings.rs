use config::ConfigError;
use dnformula_core::Pipeline;
use std::ops::Deref;

#[derive(Debug, Deserialize)]
pub struct Logging {
    pub debug: bool,
}

#[derive(Debug, Deserialize)]
pub struct Output {
    pub identity: bool,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub logging: Logging,
    pub pipeline: Pipeline,
    pub output: Output,
}

impl Settings {
    pub fn with_file<S: Deref<Target = str>>(config_file: Option<S>) -> Result<Self, ConfigError> {
        // Use the included default configuration
        let mut builder = config::Config::builder().add_source(config::File::from_str(
            include_str!("default-settings.toml"),
            config::FileFormat::Toml,
        ));

        if let Some(config_file) = config_file {
            builder = builder.add_source(config::File::new(&config_file, config::FileFormat::Toml));
        }
        builder.build()?.try_deserialize()
    }
}
