mod module_resolution_spec;
mod type_checker_spec;
