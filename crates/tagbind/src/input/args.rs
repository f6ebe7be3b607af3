use std::collections::BTreeMap;

/// Map command-line arguments to `name -> value` pairs.
///
/// Recognized forms, with leading dashes stripped from names:
/// - `--name=value`
/// - `--name value`, when the next argument is not itself a flag
/// - `--name` alone, recorded as `"true"`
///
/// Positional arguments that do not follow a flag are ignored.
///
/// ```
/// use tagbind::input::args_to_map;
///
/// let map = args_to_map(["stray", "--outer=5", "-c", "value", "--verbose"]);
/// assert_eq!(map["outer"], "5");
/// assert_eq!(map["c"], "value");
/// assert_eq!(map["verbose"], "true");
/// assert!(!map.contains_key("stray"));
/// ```
pub fn args_to_map<I, S>(args: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_string()).collect();
    let mut map = BTreeMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];
        i += 1;

        let Some(flag) = flag_name(arg) else {
            continue;
        };

        if let Some((name, value)) = flag.split_once('=') {
            map.insert(name.to_string(), value.to_string());
        } else if let Some(next) = args.get(i).filter(|next| flag_name(next).is_none()) {
            map.insert(flag.to_string(), next.clone());
            i += 1;
        } else {
            map.insert(flag.to_string(), "true".to_string());
        }
    }

    map
}

/// The flag name of `arg` without leading dashes, if it is a flag.
///
/// Negative numbers such as `-1` are values, not flags.
fn flag_name(arg: &str) -> Option<&str> {
    let name = arg.trim_start_matches('-');
    let is_flag = arg.starts_with('-')
        && !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit());
    is_flag.then_some(name)
}
