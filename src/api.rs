use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::error;

use crate::db::{Database, FeedbackFilter};
use crate::models::feedback::{FeedbackPage, FeedbackUpload};
use crate::pagination::PageRequest;

/// Query parameters of `GET /feedback`: pagination controls plus optional
/// exact-match filters.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<i64>,
    #[serde(rename = "perPage")]
    pub per_page: Option<i64>,
    pub rating: Option<i32>,
    pub customer: Option<String>,
    pub product: Option<String>,
    pub vendor: Option<String>,
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/feedback", web::post().to(create_feedback))
        .route("/feedback", web::get().to(list_feedback))
        .route("/feedback/{id}", web::get().to(get_feedback));
}

/// POST /feedback: persist one document, answer 201 with its URL in the
/// `Location` header. Payloads missing a required field never get here;
/// the `Json` extractor rejects them with 400.
pub async fn create_feedback(
    db: web::Data<Database>,
    request: web::Json<FeedbackUpload>,
) -> HttpResponse {
    match db.insert(&request).await {
        Ok(id) => HttpResponse::Created()
            .insert_header(("Location", format!("/feedback/{}", id)))
            .finish(),
        Err(err) => {
            error!("failed to persist feedback: {:?}", err);
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// GET /feedback/{id}: the stored document, or 404 when no document has
/// that id.
pub async fn get_feedback(db: web::Data<Database>, id: web::Path<String>) -> HttpResponse {
    match db.find_by_id(&id).await {
        Ok(Some(item)) => HttpResponse::Ok().json(item),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(err) => {
            error!("failed to fetch feedback {}: {:?}", id, err);
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// GET /feedback: paginated listing sorted by id descending. Out-of-range
/// pages are not an error; the envelope carries an empty `documents` array
/// with `is_last_page` set.
pub async fn list_feedback(db: web::Data<Database>, query: web::Query<ListQuery>) -> HttpResponse {
    let query = query.into_inner();
    let page = PageRequest::resolve(query.page, query.per_page);
    let filter = FeedbackFilter {
        rating: query.rating,
        customer: query.customer,
        product: query.product,
        vendor: query.vendor,
    };

    match db.find_page(&filter, page.offset(), page.per_page).await {
        Ok((documents, total)) => HttpResponse::Ok().json(FeedbackPage {
            total_documents: total,
            is_first_page: page.is_first(),
            is_last_page: page.is_last(total),
            documents,
        }),
        Err(err) => {
            error!("failed to list feedback: {:?}", err);
            HttpResponse::InternalServerError().finish()
        }
    }
}
