use std::path::Path;
use rocket::{Build, Rocket, routes, catchers};
use rocket_dyn_templates::Template;
use crate::{
    catchers::{internal_error, not_found},
    routes::{detail, index, results, vote, AppState},
};

pub fn build_rocket(state: AppState, template_dir: &Path) -> Rocket<Build> {
    let figment = rocket::Config::figment().merge(("template_dir", template_dir));

    rocket::custom(figment)
        .attach(Template::fairing())
        .manage(state)
        .mount("/polls", routes![index, detail, results, vote])
        .register("/", catchers![not_found, internal_error])
}
