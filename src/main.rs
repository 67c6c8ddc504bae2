#[macro_use]
extern crate rocket;

#[launch]
fn rocket() -> _ {
    length_converter::api::rocket()
}
