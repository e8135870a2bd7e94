pub mod register_controller;

pub use register_controller::{
    Phase, RecordApi, RecordMutator, RegisterController, RegisterState,
};
