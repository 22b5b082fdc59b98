use actix_multipart::form::MultipartForm;
use actix_multipart::form::tempfile::TempFile;
use actix_multipart::form::text::Text;
use chrono::NaiveDate;

/// Multipart expense payload; the optional receipt part is streamed to a
/// temp file and moved under the uploads directory by the route.
#[derive(MultipartForm)]
pub struct ExpenseForm {
    pub category: Text<String>,
    pub amount: Text<i64>,
    pub description: Text<String>,
    pub date: Text<NaiveDate>,
    #[multipart(limit = "10MB")]
    pub receipt: Option<TempFile>,
}
