/// Model and sampling constants for the completion service
pub mod completion {
    pub const DEFAULT_MODEL: &str = "gpt-4-0125-preview";
    pub const API_BASE_URL: &str = "https://api.openai.com/v1";

    /// Fixed sampling temperature for documentation generation
    pub const TEMPERATURE: f32 = 0.7;
    /// Cap on generated output length, in tokens
    pub const MAX_OUTPUT_TOKENS: u32 = 1500;

    pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
}

/// Prompt constants shared by the server and the composer
pub mod prompts {
    /// System role message establishing the assistant's persona
    pub const SYSTEM_PERSONA: &str =
        "You are an expert technical writer specializing in software documentation.";
}

/// Message role strings used in the OpenAI wire format
pub mod message_roles {
    pub const SYSTEM: &str = "system";
    pub const USER: &str = "user";
    pub const ASSISTANT: &str = "assistant";
}

/// Server defaults
pub mod defaults {
    pub const DEFAULT_HOST: &str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 8000;

    /// Browser origin allowed by the CORS layer (local frontend dev server)
    pub const FRONTEND_ORIGIN: &str = "http://localhost:5173";
}
