mod tests_loader;
