use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, web};
use chrono::Utc;
use serde_json::json;

use crate::api_json::TimetableRequest;
use crate::models::Course;
use crate::timetable::{candidate_batches, resolve_timetable};

/// POST /timetable
/// Accepts the course-source output (registration number + enrolled course
/// list) and answers with the resolved weekly timetable. When no candidate
/// batch matches the enrolled practical slots the resolver yields nothing;
/// this layer renders that absence as a 404 with a diagnostic body.
async fn timetable_handler(body: web::Json<serde_json::Value>) -> impl Responder {
    let body_value = body.into_inner();
    let json_str = match serde_json::to_string(&body_value) {
        Ok(s) => s,
        Err(e) => {
            return HttpResponse::BadRequest()
                .json(json!({"error": format!("invalid JSON body: {}", e)}));
        }
    };

    let request = match crate::api_json::parse_request(&json_str) {
        Ok(r) => r,
        Err(e) => {
            return HttpResponse::BadRequest()
                .json(json!({"error": format!("failed to parse input: {}", e)}));
        }
    };

    match resolve_timetable(&request.reg_number, &request.courses) {
        Some(result) => HttpResponse::Ok().json(json!({
            "status": "ok",
            "generated_at": Utc::now(),
            "timetable": result
        })),
        None => HttpResponse::NotFound().json(json!({
            "error": "no batch matched the enrolled slots",
            "reg_number": request.reg_number
        })),
    }
}

/// GET /batches
/// Returns the compiled-in candidate templates in priority order. Clients
/// use this to render empty grids; the registry is public data.
async fn batches_handler() -> impl Responder {
    HttpResponse::Ok().json(json!({"batches": candidate_batches()}))
}

async fn hello_handler() -> impl Responder {
    HttpResponse::Ok().json(json!({"message": "Hello, World!"}))
}

async fn help_handler() -> impl Responder {
    // Example TimetableRequest to show the expected format for POST /timetable
    let example = TimetableRequest {
        reg_number: "RA2111003010001".to_string(),
        courses: vec![
            Course {
                code: "CSE101".to_string(),
                title: "Operating Systems".to_string(),
                slot_type: "Theory".to_string(),
                slot: "A".to_string(),
                room: "TP-101".to_string(),
            },
            Course {
                code: "CSE102".to_string(),
                title: "Computer Networks Lab".to_string(),
                slot_type: "Practical".to_string(),
                slot: "P6-P7".to_string(),
                room: "TP-702".to_string(),
            },
        ],
    };

    let help = json!({
        "description": "API to resolve a weekly timetable from an enrolled course list. POST /timetable accepts a JSON body (see 'post_example'); the batch is inferred from the practical slot codes, so an all-theory course list resolves to nothing (404). GET /batches lists the candidate grid templates.",
        "post_example": example,
        "note": "Course order matters: when two courses book the same slot code, the later course in the list wins.",
        "batch_choices": ["1", "2"]
    });

    HttpResponse::Ok().json(help)
}

pub async fn run_server(bind_addr: &str) -> std::io::Result<()> {
    HttpServer::new(|| {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allow_any_header();

        App::new()
            .wrap(cors)
            .route("/hello", web::get().to(hello_handler))
            .route("/timetable", web::post().to(timetable_handler))
            .route("/batches", web::get().to(batches_handler))
            .route("/help", web::get().to(help_handler))
    })
    .workers(num_cpus::get())
    .bind(bind_addr)?
    .run()
    .await
}
