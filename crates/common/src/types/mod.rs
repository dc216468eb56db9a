use serde::Serialize;

/// Body of the liveness probe
#[derive(Serialize, Debug)]
pub struct Health {
    pub message: &'static str,
}

impl Health {
    pub fn ok() -> Self { Self { message: "OK" } }
}
