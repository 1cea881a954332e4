use log::Level;

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    match option_env!("SUPABASE_URL") {
        Some(url) => url,
        None => "http://localhost:54321", // supabase start
    }
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    match option_env!("SUPABASE_URL") {
        Some(url) => url,
        None => "https://aruoiqvgxoxhdlnerwww.supabase.co",
    }
}

/// Public anon key; row level security keeps the projects table read-only.
pub fn get_anon_key() -> &'static str {
    option_env!("SUPABASE_ANON_KEY").unwrap_or("")
}

pub const BOOKING_URL: &str = "https://leonceouattarastudiogroup.site/reserver";
pub const CONTACT_EMAIL: &str = "contact@leonceouattarastudiogroup.site";
pub const FOUNDER_PHOTO: &str = "https://aruoiqvgxoxhdlnerwww.supabase.co/storage/v1/object/public/portfolio-images/avatars/Leonce_Ouattara.png";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
