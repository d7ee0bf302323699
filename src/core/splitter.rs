use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::core::fixer::{ContentFixer, LineEndingFixer};
use crate::core::parser::{slugify, GlossaryParser};
use crate::core::project::{manifest_entry, normalize_entry, Project};
use crate::core::splice::splice_where;
use crate::error::{Result, SplitError};
use crate::models::{
    Collision, CollisionPolicy, Manifest, PlannedFile, SplitPlan, TermFile, UnlabeledPolicy,
};

/// Splits a glossary into one file per term and splices the new files into
/// the manifest in place of the glossary.
pub struct GlossarySplitter<'a> {
    project: &'a Project,
    parser: GlossaryParser,
    fixer: Option<Box<dyn ContentFixer>>,
}

impl<'a> GlossarySplitter<'a> {
    pub fn new(project: &'a Project) -> Self {
        let split = &project.config().split;
        let fixer: Option<Box<dyn ContentFixer>> = if split.fix_content {
            Some(Box::new(LineEndingFixer))
        } else {
            None
        };
        Self {
            project,
            parser: GlossaryParser::new(&split.delimiter),
            fixer,
        }
    }

    /// Replace the content fixer applied to the glossary before splitting
    pub fn with_fixer(mut self, fixer: Option<Box<dyn ContentFixer>>) -> Self {
        self.fixer = fixer;
        self
    }

    /// Compute the split without touching the disk.
    ///
    /// `source` is the glossary path as listed in the manifest and `output`
    /// the term directory, both relative to the project root.
    pub fn plan(&self, manifest: &Manifest, source: &str, output: &str, text: &str) -> Result<SplitPlan> {
        let split = &self.project.config().split;
        let source = normalize_entry(Path::new(source));
        let parsed = self.parser.parse(text);

        let label_count = self.parser.extract_labels(text).len();
        if label_count != parsed.sections.len() {
            warn!(
                "{} has {} term sections but {} labels",
                source,
                parsed.sections.len(),
                label_count
            );
        }

        let source_dir = Path::new(&source).parent().unwrap_or(Path::new(""));
        let intro = planned_file(manifest_entry(source_dir, &split.intro_filename), parsed.intro);

        let output_dir = Path::new(output);
        let mut terms = Vec::with_capacity(parsed.sections.len());
        let mut skipped = Vec::new();
        let mut collisions = Vec::new();
        let mut taken: HashMap<String, String> = HashMap::new();

        for section in parsed.sections {
            let Some(label) = section.label else {
                match split.on_unlabeled_section {
                    UnlabeledPolicy::Skip => {
                        warn!("Skipping term section {}: no label", section.index);
                        skipped.push(section.index);
                        continue;
                    }
                    UnlabeledPolicy::Error => {
                        return Err(SplitError::UnlabeledSection {
                            index: section.index,
                            delimiter: split.delimiter.clone(),
                        }
                        .into());
                    }
                }
            };

            let mut slug = slugify(&label);
            if slug.is_empty() {
                warn!("Term '{}' produces an empty filename", label);
            }

            if let Some(first) = taken.get(&format!("{}.md", slug)).cloned() {
                let collision = Collision {
                    filename: format!("{}.md", slug),
                    first,
                    second: label.clone(),
                };
                match split.on_slug_collision {
                    CollisionPolicy::Overwrite => {
                        warn!(
                            "'{}' and '{}' both map to {}; the later one wins",
                            collision.first, collision.second, collision.filename
                        );
                    }
                    CollisionPolicy::Suffix => {
                        slug = next_free_slug(&slug, &taken);
                        info!("'{}' renamed to {}.md to avoid a collision", label, slug);
                    }
                    CollisionPolicy::Error => {
                        return Err(SplitError::SlugCollision {
                            first: collision.first,
                            second: collision.second,
                            filename: collision.filename,
                        }
                        .into());
                    }
                }
                collisions.push(collision);
            }

            let filename = format!("{}.md", slug);
            taken.entry(filename.clone()).or_insert_with(|| label.clone());

            let content = format!("{}{}", split.delimiter, section.body);
            terms.push(TermFile {
                label,
                slug,
                file: planned_file(manifest_entry(output_dir, &filename), content),
            });
        }

        let replacements = std::iter::once(intro.manifest_entry.clone())
            .chain(terms.iter().map(|t| t.file.manifest_entry.clone()));
        let markdown_paths = splice_where(
            &manifest.primary_spec()?.markdown_paths,
            &source,
            |entry| normalize_entry(Path::new(entry)) == source,
            replacements,
        )
        .map_err(|e| SplitError::AnchorNotFound {
            anchor: e.0,
            manifest: manifest.path().to_path_buf(),
        })?;

        debug!(
            "Planned {} term files, {} skipped, {} collisions",
            terms.len(),
            skipped.len(),
            collisions.len()
        );

        Ok(SplitPlan {
            source,
            intro,
            terms,
            skipped,
            collisions,
            markdown_paths,
        })
    }

    /// Split the glossary and rewrite the manifest.
    ///
    /// Expects the manifest to have been restored from its snapshot and the
    /// precondition gate to have passed. Files written before a failure are
    /// left in place.
    pub fn split(&self, source: &str, output: &str) -> Result<SplitPlan> {
        let mut manifest = Manifest::load(&self.project.manifest_path())?;

        let source_path = self.project.resolve(source);
        let text = fs::read_to_string(&source_path)
            .map_err(|e| SplitError::ReadError(source_path.clone(), e))?;

        let plan = self.plan(&manifest, source, output, &text)?;

        if let Some(fixer) = &self.fixer {
            fixer
                .fix_file(&source_path)
                .map_err(|e| SplitError::WriteError(source_path.clone(), e))?;
        }

        let output_dir = self.project.resolve(output);
        if !output_dir.exists() {
            fs::create_dir_all(&output_dir)
                .map_err(|e| SplitError::WriteError(output_dir.clone(), e))?;
            info!("Created directory {}", output_dir.display());
        }

        self.write_file(&plan.intro)?;
        for term in &plan.terms {
            self.write_file(&term.file)?;
            info!("{} created", term.file.manifest_entry);
        }

        manifest.primary_spec_mut()?.markdown_paths = plan.markdown_paths.clone();
        manifest.save()?;

        info!(
            "Split {} into {} files",
            plan.source,
            plan.file_count()
        );
        Ok(plan)
    }

    fn write_file(&self, file: &PlannedFile) -> Result<()> {
        let path = self.project.resolve(&file.path);
        fs::write(&path, &file.content).map_err(|e| SplitError::WriteError(path.clone(), e))?;
        debug!("Wrote {} ({} bytes)", path.display(), file.content.len());
        Ok(())
    }
}

fn planned_file(entry: String, content: String) -> PlannedFile {
    PlannedFile {
        path: PathBuf::from(&entry),
        manifest_entry: entry,
        content,
    }
}

fn next_free_slug(slug: &str, taken: &HashMap<String, String>) -> String {
    (2..)
        .map(|n| format!("{}-{}", slug, n))
        .find(|candidate| !taken.contains_key(&format!("{}.md", candidate)))
        .unwrap_or_else(|| slug.to_string())
}
