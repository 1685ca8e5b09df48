use uuid::Uuid;

// Random v4 ids; `taken` guards the astronomically unlikely repeat
pub fn fresh_id(taken: impl Fn(&str) -> bool) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if !taken(&id) {
            return id;
        }
        log::warn!("generated id {} already in use, retrying", id);
    }
}
