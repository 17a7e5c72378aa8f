use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "employee_id": "EMP001",
        "full_name": "Aarav Sharma",
        "email": "aarav.sharma@company.com",
        "department": "Engineering"
    })
)]
pub struct Employee {
    /// Internal sequence id, never used for addressing
    #[schema(example = 1)]
    pub id: i64,

    /// Business identifier, immutable once assigned
    #[schema(example = "EMP001")]
    pub employee_id: String,

    #[schema(example = "Aarav Sharma")]
    pub full_name: String,

    #[schema(example = "aarav.sharma@company.com")]
    pub email: String,

    #[schema(example = "Engineering")]
    pub department: String,
}
