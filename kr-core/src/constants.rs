// Well-known labels
pub const KUDO_OPERATOR_LABEL_KEY: &str = "kudo.dev/operator";

// Env vars
pub const NAMESPACE_ENV_VAR: &str = "NAMESPACE";

// Defaults
pub const DEFAULT_NAMESPACE: &str = "spark";
pub const DEFAULT_OPERATOR_NAME: &str = "spark";
