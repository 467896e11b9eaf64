pub const CONFIG_DIRECTORY: &str = "./config";
pub const STATIC_ROUTE: &str = "/static";
