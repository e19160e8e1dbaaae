pub mod validation_crud;
