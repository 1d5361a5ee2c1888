pub mod modelslab_generate_response;
