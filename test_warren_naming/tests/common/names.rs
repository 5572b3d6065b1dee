use std::time::{SystemTime, UNIX_EPOCH};
use warren_naming::UniqueToken;

pub const ERROR_QUEUE: &str = "EasyNetQ_Default_Error_Queue";
pub const ERROR_EXCHANGE_PREFIX: &str = "ErrorExchange_";
pub const RPC_EXCHANGE: &str = "easy_net_q_rpc";
pub const RPC_RETURN_QUEUE_PREFIX: &str = "easynetq.response.";

/// Reports whether the given string is a canonical lower-case hyphenated UUID.
pub fn is_hyphenated_uuid(value: &str) -> bool {
    value.len() == 36
        && value.char_indices().all(|(index, c)| match index {
            8 | 13 | 18 | 23 => c == '-',
            _ => c.is_ascii_hexdigit() && !c.is_ascii_uppercase(),
        })
}

/// Produces a file path in the temporary directory that no other test uses.
pub fn temp_config_path(extension: &str) -> std::path::PathBuf {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    std::env::temp_dir().join(format!(
        "warren_naming.{}.{}.{}",
        seconds,
        UniqueToken::random().simple(),
        extension,
    ))
}
