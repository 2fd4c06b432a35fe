const DEFAULT_WEBHOOK_URL: &str = "https://hook.us2.make.com/4mnej2ygadqhb3zafey90j29g125ka3b";

/// Endpoint both lead forms post to. Override per deployment by building with
/// `TALISMAN_WEBHOOK_URL` set.
pub fn get_webhook_url() -> &'static str {
    option_env!("TALISMAN_WEBHOOK_URL").unwrap_or(DEFAULT_WEBHOOK_URL)
}

// Landing typewriter headlines
pub const FIRST_LINE_DELAY_MS: u32 = 2_500;
pub const SECOND_LINE_DELAY_MS: u32 = 4_500;

/// Delay between a successful submission and the redirect back home.
pub const REDIRECT_DELAY_MS: u32 = 2_000;

pub const MIN_PROBLEM_DESCRIPTION_CHARS: usize = 50;

pub const SUCCESS_TOAST_MS: u32 = 2_000;
pub const ERROR_TOAST_MS: u32 = 4_000;
