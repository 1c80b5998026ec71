use actix_web::{web, HttpResponse, Responder};
use common::config::EditorConfig;

pub async fn process(config: web::Data<EditorConfig>) -> impl Responder {
    HttpResponse::Ok().json(config.get_ref())
}
