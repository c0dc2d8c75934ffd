// src/output/language.rs

//! Maps file extensions to the language label used on code fences.

use std::path::Path;

/// Extension (with leading dot) to fence label. Matching is case-sensitive.
const EXTENSION_TO_LANGUAGE: &[(&str, &str)] = &[
    (".py", "python"),
    (".js", "javascript"),
    (".java", "java"),
    (".cpp", "cpp"),
    (".c", "c"),
    (".cs", "csharp"),
    (".html", "html"),
    (".css", "css"),
    (".rb", "ruby"),
    (".php", "php"),
    (".go", "go"),
    (".rs", "rust"),
    (".swift", "swift"),
    (".kt", "kotlin"),
    (".ts", "typescript"),
    (".sh", "bash"),
    (".md", "markdown"),
];

/// Returns the fence label for a path, or `""` when its extension is unknown.
///
/// Only the final extension counts, and dotfiles such as `.bashrc` have none.
///
/// # Examples
/// ```
/// use repo2ai::output::language::language_hint;
/// use std::path::Path;
///
/// assert_eq!(language_hint(Path::new("src/main.rs")), "rust");
/// assert_eq!(language_hint(Path::new("x.py")), "python");
/// assert_eq!(language_hint(Path::new("data.xyz")), "");
/// assert_eq!(language_hint(Path::new("Makefile")), "");
/// ```
pub fn language_hint(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return "";
    };
    EXTENSION_TO_LANGUAGE
        .iter()
        .find(|(dotted, _)| dotted[1..] == *ext)
        .map_or("", |(_, label)| *label)
}
