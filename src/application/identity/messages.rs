//! Failure message catalogue

pub mod missing_argument {
    pub const ID: &str = "Missing argument: id";
    pub const NAME: &str = "Missing argument: name";
    pub const EMAIL: &str = "Missing argument: email";
    pub const USER: &str = "Missing argument: user";
}

pub mod not_found {
    pub const USER: &str = "User not found";
    pub const ALL_USERS: &str = "Users not found";
}

pub mod process_failure {
    pub const USER_CREATION: &str = "User creation failed";
}
