//! Common eel sources for tests.

pub const FUNCTION_DECL: &str = "function foo(bar) {";

pub const PROCEDURE_WITH_BODY: &str = r#"procedure greet(name, upvalue count)
{
	// say hello
	print("hello ", name, "\n");
	if count > 2
		return true;
	throw "too many";
}
"#;

pub const EXPORTED_MODULE: &str = r#"export function add(a, b)
{
	return a + b;
}

local limit = 0x40;
local scale = 2.5f;
"#;
