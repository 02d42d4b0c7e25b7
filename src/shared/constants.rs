pub const CONFIG_DIRECTORY: &str = "./config";
pub const DEFAULT_QUESTION_BANK_URL: &str = "https://api.devfaq.pl";
pub const DISCORD_BASE_URL: &str = "https://discord.com/api/v10";
