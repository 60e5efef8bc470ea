/*
 * Responsibility
 * - 書き込み系 endpoint 共通のレスポンス形
 *   - POST   → {"success": true, "created": id}
 *   - PATCH  → {"status-code": 200, "success": true}
 *   - DELETE → {"success": true, "deleted": id}
 */
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i64,
}

impl CreatedResponse {
    pub fn new(id: i64) -> Self {
        Self {
            success: true,
            created: id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdatedResponse {
    #[serde(rename = "status-code")]
    pub status_code: u16,
    pub success: bool,
}

impl UpdatedResponse {
    pub fn ok() -> Self {
        Self {
            status_code: 200,
            success: true,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i64,
}

impl DeletedResponse {
    pub fn new(id: i64) -> Self {
        Self {
            success: true,
            deleted: id,
        }
    }
}
