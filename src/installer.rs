//! Rule installation.
//!
//! [`Installer::run`] walks a single linear pass:
//!
//! 1. enumerate `.mdc` files in the source
//! 2. read each file's front matter into a [`RuleDescriptor`]
//! 3. sort by name
//! 4. ask which rules to install
//! 5. copy the chosen files into `<project>/.cursor/rules`
//!
//! Any read, parse or write failure aborts the run. Nothing is written until
//! every selected file has been read.
//!
//! # Example
//!
//! ```
//! use cursor_rules::installer::{InstallOutcome, Installer, Selection};
//! use cursor_rules::rules::DirSource;
//! use cursor_rules::ui::MockUI;
//!
//! let rules = tempfile::tempdir().unwrap();
//! let project = tempfile::tempdir().unwrap();
//! std::fs::write(rules.path().join("a.mdc"), "---\nname: Alpha\n---\n").unwrap();
//!
//! let source = DirSource::new(rules.path()).unwrap();
//! let installer = Installer::new(Box::new(source), project.path());
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("rules", "a.mdc");
//! let outcome = installer.run(&Selection::Prompt, &mut ui).unwrap();
//!
//! assert_eq!(outcome, InstallOutcome::Installed(1));
//! assert!(project.path().join(".cursor/rules/a.mdc").exists());
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, RulesError};
use crate::rules::{is_rule_file, parse_metadata, sort_by_name, RuleDescriptor, RuleSource};
use crate::ui::{Prompt, PromptOption, PromptResult, UserInterface};

/// Destination of installed rules, relative to the project root.
pub const TARGET_DIR: &str = ".cursor/rules";

/// Key of the rule selection prompt.
pub const PROMPT_KEY: &str = "rules";

/// How the set of rules to install is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Ask the user.
    #[default]
    Prompt,
    /// Install every available rule.
    All,
    /// Install exactly these files.
    Named(Vec<String>),
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The source holds no rule files.
    NoRulesFound,
    /// Nothing was selected.
    NoSelection,
    /// The user backed out of the prompt.
    Cancelled,
    /// Dry run; this many rules would have been installed.
    DryRun(usize),
    /// This many rules were installed.
    Installed(usize),
}

/// Copies selected rule files from a source into a project.
pub struct Installer {
    source: Box<dyn RuleSource>,
    project_root: PathBuf,
    dry_run: bool,
}

impl Installer {
    /// Create an installer that writes into `<project_root>/.cursor/rules`.
    pub fn new(source: Box<dyn RuleSource>, project_root: &Path) -> Self {
        Self {
            source,
            project_root: project_root.to_path_buf(),
            dry_run: false,
        }
    }

    /// Report what would be installed without writing anything.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Directory rules are installed into.
    pub fn target_dir(&self) -> PathBuf {
        self.project_root.join(TARGET_DIR)
    }

    /// Read and sort the descriptors of every rule file in the source.
    pub fn load_rules(&self) -> Result<Vec<RuleDescriptor>> {
        load_rules(self.source.as_ref())
    }

    /// Copy the named rule files into the target directory.
    ///
    /// `filenames` must already be checked against the enumerated rules.
    /// Existing files with the same name are overwritten; other files in the
    /// target are left alone. Returns the number of files written.
    fn install(&self, filenames: &[String]) -> Result<usize> {
        let mut contents = Vec::with_capacity(filenames.len());
        for filename in filenames {
            contents.push((filename, self.source.read(filename)?));
        }

        let target = self.target_dir();
        fs::create_dir_all(&target).map_err(|source| RulesError::FileWrite {
            path: target.clone(),
            source,
        })?;

        for (filename, bytes) in &contents {
            let dest = target.join(filename);
            fs::write(&dest, bytes).map_err(|source| RulesError::FileWrite {
                path: dest.clone(),
                source,
            })?;
            debug!("Copied {} to {}", filename, dest.display());
        }

        Ok(contents.len())
    }

    /// Run the whole flow: load, select, install, report.
    pub fn run(&self, selection: &Selection, ui: &mut dyn UserInterface) -> Result<InstallOutcome> {
        let rules = self.load_rules()?;
        if rules.is_empty() {
            ui.message("No rules found");
            return Ok(InstallOutcome::NoRulesFound);
        }

        let chosen = match selection {
            Selection::All => rules.iter().map(|r| r.filename.clone()).collect(),
            Selection::Named(names) => names.clone(),
            Selection::Prompt => match ui.prompt(&selection_prompt(&rules))? {
                PromptResult::Selected(values) => values,
                PromptResult::Cancelled => {
                    ui.message("Selection cancelled");
                    return Ok(InstallOutcome::Cancelled);
                }
            },
        };

        let chosen = validate_selection(&rules, chosen)?;
        if chosen.is_empty() {
            ui.message("No rules selected");
            return Ok(InstallOutcome::NoSelection);
        }

        if self.dry_run {
            for filename in &chosen {
                ui.message(&format!("Would install {} → {}/{}", filename, TARGET_DIR, filename));
            }
            ui.warning("Dry run: nothing was written");
            return Ok(InstallOutcome::DryRun(chosen.len()));
        }

        let count = self.install(&chosen)?;
        if ui.output_mode().shows_details() {
            for filename in &chosen {
                ui.message(&format!("  {} → {}/{}", filename, TARGET_DIR, filename));
            }
        }
        debug!("Installed {} rule(s) into {}", count, self.target_dir().display());
        ui.success(&format!("Installed {} rule(s) in {}", count, TARGET_DIR));

        Ok(InstallOutcome::Installed(count))
    }
}

/// Read every rule file in `source` and sort the descriptors by name.
pub fn load_rules(source: &dyn RuleSource) -> Result<Vec<RuleDescriptor>> {
    let entries = source.entries()?;
    debug!("Found {} entries in {}", entries.len(), source.location());

    let mut rules = Vec::new();
    for filename in entries.into_iter().filter(|f| is_rule_file(f)) {
        rules.push(describe(source, filename)?);
    }

    sort_by_name(&mut rules)?;
    Ok(rules)
}

fn describe(source: &dyn RuleSource, filename: String) -> Result<RuleDescriptor> {
    let path = source.path_of(&filename);
    let bytes = source.read(&filename)?;
    let content = String::from_utf8(bytes).map_err(|e| RulesError::MetadataParse {
        path: path.clone(),
        message: e.to_string(),
    })?;

    let metadata = parse_metadata(&content, &path)?;
    let rule = RuleDescriptor::from_metadata(filename, metadata);
    debug!("Loaded rule '{}' from {}", rule.name, rule.filename);
    Ok(rule)
}

/// Build the checkbox prompt for a sorted list of rules.
pub fn selection_prompt(rules: &[RuleDescriptor]) -> Prompt {
    Prompt {
        key: PROMPT_KEY.to_string(),
        question: "Pick Cursor rules to install:".to_string(),
        options: rules
            .iter()
            .map(|rule| PromptOption {
                label: rule.label(),
                value: rule.filename.clone(),
            })
            .collect(),
    }
}

/// Drop duplicates and reject names that are not available rules.
fn validate_selection(rules: &[RuleDescriptor], chosen: Vec<String>) -> Result<Vec<String>> {
    let available: HashSet<&str> = rules.iter().map(|r| r.filename.as_str()).collect();
    let mut seen = HashSet::new();
    let mut selected = Vec::with_capacity(chosen.len());

    for name in chosen {
        if !available.contains(name.as_str()) {
            return Err(RulesError::UnknownRule { name });
        }
        if seen.insert(name.clone()) {
            selected.push(name);
        }
    }

    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::DirSource;
    use crate::ui::{MockUI, OutputMode};
    use tempfile::TempDir;

    const ALPHA: &str = "---\nname: Alpha\ndescription: First\n---\n# Alpha body\n";
    const BETA: &str = "# b has no metadata\n";

    struct Fixture {
        rules: TempDir,
        project: TempDir,
    }

    impl Fixture {
        fn new(files: &[(&str, &str)]) -> Self {
            let rules = TempDir::new().unwrap();
            for (name, content) in files {
                fs::write(rules.path().join(name), content).unwrap();
            }
            Self {
                rules,
                project: TempDir::new().unwrap(),
            }
        }

        fn installer(&self) -> Installer {
            let source = DirSource::new(self.rules.path()).unwrap();
            Installer::new(Box::new(source), self.project.path())
        }

        fn target(&self) -> PathBuf {
            self.project.path().join(TARGET_DIR)
        }

        fn installed(&self) -> Vec<String> {
            let mut names: Vec<String> = fs::read_dir(self.target())
                .unwrap()
                .map(|e| e.unwrap().file_name().into_string().unwrap())
                .collect();
            names.sort();
            names
        }
    }

    #[test]
    fn empty_source_reports_no_rules() {
        let fixture = Fixture::new(&[]);
        let mut ui = MockUI::new();

        let outcome = fixture.installer().run(&Selection::Prompt, &mut ui).unwrap();

        assert_eq!(outcome, InstallOutcome::NoRulesFound);
        assert!(ui.has_message("No rules found"));
        assert!(ui.prompts_shown().is_empty());
        assert!(!fixture.target().exists());
    }

    #[test]
    fn non_rule_files_only_reports_no_rules() {
        let fixture = Fixture::new(&[("README.md", "# readme"), ("notes.txt", "n")]);
        let mut ui = MockUI::new();

        let outcome = fixture.installer().run(&Selection::Prompt, &mut ui).unwrap();

        assert_eq!(outcome, InstallOutcome::NoRulesFound);
        assert!(!fixture.target().exists());
    }

    #[test]
    fn load_rules_sorts_and_defaults() {
        let fixture = Fixture::new(&[("b.mdc", BETA), ("a.mdc", ALPHA), ("skip.md", "x")]);

        let rules = fixture.installer().load_rules().unwrap();

        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].label(), "Alpha — First");
        assert_eq!(rules[1].label(), "b — ");
        assert!(rules[1].tags.is_empty());
    }

    #[test]
    fn prompt_lists_every_rule_once_in_name_order() {
        let fixture = Fixture::new(&[
            ("z.mdc", "---\nname: aardvark\n---\n"),
            ("b.mdc", BETA),
            ("a.mdc", ALPHA),
        ]);
        let mut ui = MockUI::new();

        fixture.installer().run(&Selection::Prompt, &mut ui).unwrap();

        let prompt = &ui.prompts_shown()[0];
        let labels: Vec<_> = prompt.options.iter().map(|o| o.label.as_str()).collect();
        let values: Vec<_> = prompt.options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(labels, vec!["aardvark — ", "Alpha — First", "b — "]);
        assert_eq!(values, vec!["z.mdc", "a.mdc", "b.mdc"]);
    }

    #[test]
    fn selecting_one_rule_installs_exactly_that_file() {
        let fixture = Fixture::new(&[("a.mdc", ALPHA), ("b.mdc", BETA)]);
        let mut ui = MockUI::new();
        ui.set_prompt_response(PROMPT_KEY, "b.mdc");

        let outcome = fixture.installer().run(&Selection::Prompt, &mut ui).unwrap();

        assert_eq!(outcome, InstallOutcome::Installed(1));
        assert_eq!(fixture.installed(), vec!["b.mdc"]);
        assert_eq!(fs::read_to_string(fixture.target().join("b.mdc")).unwrap(), BETA);
        assert!(ui.has_success("Installed 1 rule(s)"));
    }

    #[test]
    fn empty_selection_touches_nothing() {
        let fixture = Fixture::new(&[("a.mdc", ALPHA)]);
        let mut ui = MockUI::new();

        let outcome = fixture.installer().run(&Selection::Prompt, &mut ui).unwrap();

        assert_eq!(outcome, InstallOutcome::NoSelection);
        assert!(ui.has_message("No rules selected"));
        assert!(!fixture.target().exists());
    }

    #[test]
    fn cancelled_prompt_touches_nothing() {
        let fixture = Fixture::new(&[("a.mdc", ALPHA)]);
        let mut ui = MockUI::new();
        ui.cancel_prompt(PROMPT_KEY);

        let outcome = fixture.installer().run(&Selection::Prompt, &mut ui).unwrap();

        assert_eq!(outcome, InstallOutcome::Cancelled);
        assert!(ui.has_message("Selection cancelled"));
        assert!(!fixture.target().exists());
    }

    #[test]
    fn select_all_skips_prompt() {
        let fixture = Fixture::new(&[("a.mdc", ALPHA), ("b.mdc", BETA)]);
        let mut ui = MockUI::new();

        let outcome = fixture.installer().run(&Selection::All, &mut ui).unwrap();

        assert_eq!(outcome, InstallOutcome::Installed(2));
        assert!(ui.prompts_shown().is_empty());
        assert_eq!(fixture.installed(), vec!["a.mdc", "b.mdc"]);
    }

    #[test]
    fn named_selection_dedupes() {
        let fixture = Fixture::new(&[("a.mdc", ALPHA), ("b.mdc", BETA)]);
        let mut ui = MockUI::new();
        let selection = Selection::Named(vec!["a.mdc".to_string(), "a.mdc".to_string()]);

        let outcome = fixture.installer().run(&selection, &mut ui).unwrap();

        assert_eq!(outcome, InstallOutcome::Installed(1));
        assert_eq!(fixture.installed(), vec!["a.mdc"]);
    }

    #[test]
    fn unknown_selection_fails_before_writing() {
        let fixture = Fixture::new(&[("a.mdc", ALPHA)]);
        let mut ui = MockUI::new();
        let selection = Selection::Named(vec!["a.mdc".to_string(), "ghost.mdc".to_string()]);

        let err = fixture.installer().run(&selection, &mut ui).unwrap_err();

        assert!(matches!(err, RulesError::UnknownRule { ref name } if name == "ghost.mdc"));
        assert!(!fixture.target().exists());
    }

    #[test]
    fn selection_outside_source_is_rejected() {
        let fixture = Fixture::new(&[("a.mdc", ALPHA)]);
        let selection = Selection::Named(vec!["../escape.mdc".to_string()]);

        let err = fixture
            .installer()
            .run(&selection, &mut MockUI::new())
            .unwrap_err();

        assert!(matches!(err, RulesError::UnknownRule { .. }));
        assert!(!fixture.target().exists());
        assert!(!fixture.project.path().join(".cursor/escape.mdc").exists());
    }

    #[test]
    fn malformed_metadata_aborts_run() {
        let fixture = Fixture::new(&[("a.mdc", ALPHA), ("bad.mdc", "---\nname: [oops\n---\n")]);
        let mut ui = MockUI::new();

        let err = fixture.installer().run(&Selection::All, &mut ui).unwrap_err();

        assert!(matches!(err, RulesError::MetadataParse { .. }));
        assert!(err.to_string().contains("bad.mdc"));
        assert!(ui.prompts_shown().is_empty());
        assert!(!fixture.target().exists());
    }

    #[test]
    fn non_utf8_rule_aborts_run() {
        let fixture = Fixture::new(&[]);
        fs::write(fixture.rules.path().join("bin.mdc"), [0xffu8, 0xfe, 0x00]).unwrap();
        let mut ui = MockUI::new();

        let err = fixture.installer().run(&Selection::All, &mut ui).unwrap_err();

        assert!(matches!(err, RulesError::MetadataParse { .. }));
    }

    #[test]
    fn existing_files_are_overwritten_and_others_kept() {
        let fixture = Fixture::new(&[("a.mdc", ALPHA)]);
        fs::create_dir_all(fixture.target()).unwrap();
        fs::write(fixture.target().join("a.mdc"), "stale").unwrap();
        fs::write(fixture.target().join("mine.mdc"), "local rule").unwrap();
        let mut ui = MockUI::new();

        fixture.installer().run(&Selection::All, &mut ui).unwrap();

        assert_eq!(fs::read_to_string(fixture.target().join("a.mdc")).unwrap(), ALPHA);
        assert_eq!(
            fs::read_to_string(fixture.target().join("mine.mdc")).unwrap(),
            "local rule"
        );
    }

    #[test]
    fn installing_twice_is_idempotent() {
        let fixture = Fixture::new(&[("a.mdc", ALPHA), ("b.mdc", BETA)]);
        let selection = Selection::Named(vec!["a.mdc".to_string()]);

        fixture.installer().run(&selection, &mut MockUI::new()).unwrap();
        let first = fs::read(fixture.target().join("a.mdc")).unwrap();
        fixture.installer().run(&selection, &mut MockUI::new()).unwrap();

        assert_eq!(fixture.installed(), vec!["a.mdc"]);
        assert_eq!(fs::read(fixture.target().join("a.mdc")).unwrap(), first);
    }

    #[test]
    fn install_copies_bytes_verbatim() {
        let fixture = Fixture::new(&[]);
        let content = "---\r\nname: Crlf\r\n---\r\nbody\u{00e9}\r\n";
        fs::write(fixture.rules.path().join("crlf.mdc"), content).unwrap();

        let count = fixture.installer().install(&["crlf.mdc".to_string()]).unwrap();

        assert_eq!(count, 1);
        assert_eq!(
            fs::read(fixture.target().join("crlf.mdc")).unwrap(),
            content.as_bytes()
        );
    }

    #[test]
    fn dry_run_writes_nothing() {
        let fixture = Fixture::new(&[("a.mdc", ALPHA)]);
        let mut ui = MockUI::new();

        let outcome = fixture
            .installer()
            .dry_run(true)
            .run(&Selection::All, &mut ui)
            .unwrap();

        assert_eq!(outcome, InstallOutcome::DryRun(1));
        assert!(ui.has_message("Would install a.mdc"));
        assert!(!fixture.target().exists());
    }

    #[test]
    fn verbose_mode_lists_copied_files() {
        let fixture = Fixture::new(&[("a.mdc", ALPHA)]);
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        fixture.installer().run(&Selection::All, &mut ui).unwrap();

        assert!(ui.has_message("a.mdc → .cursor/rules/a.mdc"));
    }

    #[test]
    fn target_is_a_file_reports_write_error() {
        let fixture = Fixture::new(&[("a.mdc", ALPHA)]);
        fs::create_dir_all(fixture.project.path().join(".cursor")).unwrap();
        fs::write(fixture.target(), "not a directory").unwrap();

        let err = fixture
            .installer()
            .run(&Selection::All, &mut MockUI::new())
            .unwrap_err();

        assert!(matches!(err, RulesError::FileWrite { .. }));
    }

    #[test]
    fn selection_prompt_uses_labels_and_filenames() {
        let rules = vec![RuleDescriptor::from_metadata(
            "b.mdc",
            crate::rules::RuleMetadata::default(),
        )];
        let prompt = selection_prompt(&rules);
        assert_eq!(prompt.key, PROMPT_KEY);
        assert_eq!(
            prompt.options,
            vec![PromptOption {
                label: "b — ".to_string(),
                value: "b.mdc".to_string(),
            }]
        );
    }
}
