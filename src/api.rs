use rocket::fairing::AdHoc;
use rocket::figment::Figment;
use rocket::serde::{json::Json, Deserialize, Serialize};
use rocket::{Build, Rocket, State};

use crate::config::ConverterConfig;
use crate::conversion::{self, Length};
use crate::form::ConverterForm;

pub fn rocket() -> Rocket<Build> {
    rocket_with(rocket::Config::figment())
}

/// Build the service on top of the given configuration sources.
pub fn rocket_with(figment: Figment) -> Rocket<Build> {
    rocket::custom(figment)
        .mount("/", routes![convert, units, form, submit_form])
        .attach(AdHoc::config::<ConverterConfig>())
        .attach(AdHoc::on_liftoff("Converter defaults", |rocket| {
            Box::pin(async move {
                if let Some(config) = rocket.state::<ConverterConfig>() {
                    log::info!(
                        "forms start converting {} to {}",
                        config.default_from, config.default_to
                    );
                }
            })
        }))
}

/// A conversion with units given by name, as typed or picked by a client.
#[derive(Deserialize, Serialize, Debug)]
#[serde(crate = "rocket::serde")]
pub struct ConversionRequest {
    value: String,
    from: String,
    to: String,
}

/// Always carries text: either the converted value or the reason it could
/// not be computed.
#[derive(Deserialize, Serialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct ConversionResponse {
    result: String,
}

#[derive(Deserialize, Serialize, Debug)]
#[serde(crate = "rocket::serde")]
pub struct FormSubmission {
    input: String,
    from: Length,
    to: Length,
}

#[post("/convert", data = "<conversion>")]
fn convert(conversion: Json<ConversionRequest>) -> Json<ConversionResponse> {
    let result = conversion::convert_text(&conversion.value, &conversion.from, &conversion.to);
    log::debug!(
        "{:?} {} -> {}: {}",
        conversion.value, conversion.from, conversion.to, result
    );

    Json(ConversionResponse { result })
}

#[get("/units")]
fn units() -> Json<Vec<Length>> {
    Json(Length::ALL.to_vec())
}

#[get("/form")]
fn form(config: &State<ConverterConfig>) -> Json<ConverterForm> {
    Json(ConverterForm::from(config.inner()))
}

#[post("/form", data = "<submission>")]
fn submit_form(submission: Json<FormSubmission>) -> Json<ConverterForm> {
    let submission = submission.into_inner();
    let mut form = ConverterForm::new(submission.from, submission.to);
    form.set_input(submission.input);
    form.submit();
    log::debug!("form submitted: {}", form.result_label());

    Json(form)
}
