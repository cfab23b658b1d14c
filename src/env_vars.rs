use std::collections::HashMap;
use std::path::PathBuf;

/// Upper bound on substitution passes, so that a variable whose value
/// references itself can't keep growing forever.
const MAX_PASSES: usize = 16;

/// A source of environment variables.
///
/// The search path is computed from whatever this returns, which
/// lets tests supply their own variables instead of touching the
/// process environment.
pub trait Environment {
	/// Returns the value of `name`, or `None` if it's unset.
	fn var(&self, name: &str) -> Option<String>;
}

/// The environment of the current process.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
	fn var(&self, name: &str) -> Option<String> {
		std::env::var(name).ok()
	}
}

impl Environment for HashMap<String, String> {
	fn var(&self, name: &str) -> Option<String> {
		self.get(name).cloned()
	}
}

impl<E: Environment + ?Sized> Environment for &E {
	fn var(&self, name: &str) -> Option<String> {
		(**self).var(name)
	}
}

/// The home directory of the current user: `$HOME` if set,
/// otherwise whatever the platform reports.
pub fn home_dir(env: &impl Environment) -> Option<PathBuf> {
	env.var("HOME")
		.filter(|home| !home.is_empty())
		.map(PathBuf::from)
		.or_else(dirs::home_dir)
}

/// The XDG data directories, most important first: `$XDG_DATA_HOME`
/// (or `~/.local/share`), then each entry of `$XDG_DATA_DIRS`
/// (or `/usr/local/share:/usr/share`).
pub fn xdg_data_dirs(env: &impl Environment) -> Vec<PathBuf> {
	let mut res = Vec::new();

	match env.var("XDG_DATA_HOME").filter(|dir| !dir.is_empty()) {
		Some(dir) => res.push(PathBuf::from(dir)),
		None => {
			if let Some(home) = home_dir(env) {
				res.push(home.join(".local/share"));
			}
		}
	}

	let dirs = env
		.var("XDG_DATA_DIRS")
		.filter(|dirs| !dirs.is_empty())
		.unwrap_or_else(|| String::from("/usr/local/share:/usr/share"));
	for dir in dirs.split(':').filter(|dir| !dir.is_empty()) {
		let dir = PathBuf::from(dir);
		if !res.contains(&dir) {
			res.push(dir);
		}
	}

	res
}

/// Substitute all the variables in the provided strings.
///
/// Given a slice of `str`s, all variables set in `env` will be substituted
/// with their value. Unset variables are left as they are. (Note that the
/// syntax `${var_name_here}` is not supported)
/// This function will also handle PATH-like colon-separated segments in variable
/// values, producing one string per segment.
pub fn substitute_variables(env: &impl Environment, strings: &[&str]) -> Vec<String> {
	let mut vec: Vec<String> = strings.iter().map(|el| String::from(*el)).collect();

	for _ in 0..MAX_PASSES {
		let next = substitute_variables_pass(env, &vec);
		if next == vec {
			break;
		}
		vec = next;
	}

	vec
}

/// Helper function for `substitute_variables`, to split off logic.
fn substitute_variables_pass(env: &impl Environment, strings: &[String]) -> Vec<String> {
	let mut vec: Vec<String> = Vec::with_capacity(strings.len());

	for i in strings {
		match find_first_set_variable(env, i) {
			None => vec.push(i.to_string()),
			Some((name, value)) => vec.extend(substitute_single_variable(i, name, &value)),
		}
	}

	vec
}

/// Substitutes the variable `name`, whose value is `value`, in the given string.
///
/// If the value contains multiple colon-separated segments
/// (akin to the unix PATH variable, or the XDG Base Directory ones),
/// then multiple strings will be generated, one for each segment.
fn substitute_single_variable(in_str: &str, name: &str, value: &str) -> Vec<String> {
	value
		.split(':')
		.map(|current_segment| {
			let context = |actual: &str| {
				if name == actual {
					Some(current_segment)
				} else {
					None
				}
			};

			String::from(shellexpand::env_with_context_no_errors(in_str, context))
		})
		.collect()
}

/// Find the first variable in `input` that has a value in `env`,
/// and return its name together with that value.
fn find_first_set_variable<'a>(env: &impl Environment, input: &'a str) -> Option<(&'a str, String)> {
	let mut rest = input;

	while let Some(start) = rest.find('$') {
		let trimmed: &str = &rest[start + 1..];
		let end = trimmed
			.find(|ch: char| ch != '_' && !ch.is_alphanumeric())
			.unwrap_or_else(|| trimmed.len());
		let name = &trimmed[0..end];

		if !name.is_empty() {
			if let Some(value) = env.var(name) {
				return Some((name, value));
			}
		}

		rest = &trimmed[end..];
	}

	None
}
