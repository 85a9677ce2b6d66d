use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: String,

    pub gemini_api_key: String,
    pub gemini_model: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var("LIFEDASH_DATA_DIR").unwrap_or_else(|_| ".lifedash".into()),

            gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or_else(|_| String::new()),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash".into()),
        }
    }
}
