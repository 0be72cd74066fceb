pub mod restore_loader;
pub mod restored_state;
