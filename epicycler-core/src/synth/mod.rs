pub mod epicycle;
