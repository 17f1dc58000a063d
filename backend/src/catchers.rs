use rocket::{Request, catch};
use rocket_dyn_templates::{Template, context};

#[catch(404)]
pub fn not_found(req: &Request) -> Template {
    Template::render("errors/404", context! {
        path: req.uri().path().as_str(),
    })
}

#[catch(500)]
pub fn internal_error(_req: &Request) -> Template {
    Template::render("errors/500", context! {})
}
