pub mod checkpoint_state;
