pub mod section_image;
pub mod session;
pub mod submission;
pub mod upload;
pub mod user;

use rocket::{Build, Rocket};

pub fn register_routes(rocket: Rocket<Build>) -> Rocket<Build> {
    let rocket = section_image::controllers::register_routes(rocket);
    let rocket = session::controllers::register_routes(rocket);
    let rocket = submission::controllers::register_routes(rocket);
    let rocket = upload::controllers::register_routes(rocket);
    let rocket = user::controllers::register_routes(rocket);
    rocket
}
