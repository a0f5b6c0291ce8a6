mod tests_declarations;
mod tests_illegal;
mod tests_keywords;
mod tests_registry;
