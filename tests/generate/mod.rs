mod generate_with_custom_options;
mod reject_invalid_options;
