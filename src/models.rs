use serde::{Deserialize, Serialize};

/// Body returned by `POST {base}/counter` and `GET {base}/counter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: u64,
}
