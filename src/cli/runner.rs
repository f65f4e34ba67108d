use crate::{
    cli::{
        answers::{AnswerCollector, Answers},
        Args, SkipConfirm,
    },
    constants::{DEFAULT_KERNEL_FILE, DEFAULT_TARGET_DIR},
    error::Result,
    ext::PathExt,
    generator::{FieldTypeGenerator, GenerationReport, GenerationRequest},
    integration::{
        check_autoloader, update_kernel, AutoloadChecker, BundleRegistrar, ComposerAutoloader,
        FollowUp, KernelFileRegistrar,
    },
    prompt::{confirm, get_prompt_provider, PromptProvider},
    renderer::{MiniJinjaRenderer, TemplateRenderer},
};
use std::path::PathBuf;

/// Result of a completed run: what was generated and what is left to do.
#[derive(Debug)]
pub struct RunSummary {
    pub report: GenerationReport,
    pub follow_ups: Vec<FollowUp>,
}

/// Main CLI runner that orchestrates answer collection, generation and host integration
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes the complete workflow against the real terminal and host project
    pub fn run(self) -> Result<()> {
        let prompter = get_prompt_provider();
        let engine = self.renderer();
        let autoloader = ComposerAutoloader::new(&self.args.project_root);
        let registrar = KernelFileRegistrar::new(self.kernel_file());

        self.execute(&prompter, &engine, &autoloader, &registrar)?;
        Ok(())
    }

    /// Runs the workflow with explicit collaborators.
    ///
    /// Returns `None` when the developer aborted before generation.
    pub fn execute(
        &self,
        prompter: &dyn PromptProvider,
        engine: &dyn TemplateRenderer,
        autoloader: &dyn AutoloadChecker,
        registrar: &dyn BundleRegistrar,
    ) -> Result<Option<RunSummary>> {
        let Some(mut request) = self.collect_request(prompter)? else {
            return Ok(None);
        };
        request.base_dir = request.base_dir.to_absolute();
        log::debug!("Generation request: {request:?}");

        let report = FieldTypeGenerator::new(engine).dry_run(self.args.dry_run).generate(&request)?;

        if report.dry_run {
            prompter.say(&format!(
                "[DRY RUN] {} files would be generated in {}",
                report.files.len(),
                report.target_dir.display()
            ));
            return Ok(Some(RunSummary { report, follow_ups: Vec::new() }));
        }

        prompter.say("Generating the Field Type structure code: OK");

        let follow_ups = self.integrate(prompter, &request, autoloader, registrar)?;
        write_summary(prompter, &follow_ups);

        Ok(Some(RunSummary { report, follow_ups }))
    }

    fn collect_request(&self, prompter: &dyn PromptProvider) -> Result<Option<GenerationRequest>> {
        let answers = Answers::load(&self.args)?;
        if self.args.non_interactive {
            return AnswerCollector::from_answers(&answers).map(Some);
        }
        AnswerCollector::new(prompter, self.args.skips(SkipConfirm::Generation))
            .with_default_dir(&self.args.project_root.join(DEFAULT_TARGET_DIR))
            .collect(&answers)
    }

    /// Autoload check followed by kernel registration.
    fn integrate(
        &self,
        prompter: &dyn PromptProvider,
        request: &GenerationRequest,
        autoloader: &dyn AutoloadChecker,
        registrar: &dyn BundleRegistrar,
    ) -> Result<Vec<FollowUp>> {
        let class = request.bundle_class();
        let mut follow_ups = Vec::new();

        prompter.say("Checking that the bundle is autoloaded");
        follow_ups.extend(check_autoloader(autoloader, &request.namespace, &class));

        let auto = self.args.non_interactive
            || confirm(
                prompter,
                self.args.skips(SkipConfirm::Kernel),
                "Confirm automatic update of your Kernel",
            )?;
        prompter.say("Enabling the bundle inside the Kernel");
        follow_ups.extend(update_kernel(registrar, &class, auto));

        Ok(follow_ups)
    }

    fn renderer(&self) -> MiniJinjaRenderer {
        match &self.args.skeleton_dir {
            Some(dir) => MiniJinjaRenderer::with_skeleton_dir(dir),
            None => MiniJinjaRenderer::new(),
        }
    }

    fn kernel_file(&self) -> PathBuf {
        self.args.kernel.clone().unwrap_or_else(|| self.args.project_root.join(DEFAULT_KERNEL_FILE))
    }
}

fn write_summary(prompter: &dyn PromptProvider, follow_ups: &[FollowUp]) {
    if follow_ups.is_empty() {
        prompter.say("\nEverything is OK! Now get to work :).");
        return;
    }

    prompter.say(
        "\nThe command was not able to configure everything automatically.\n\
         You'll need to make the following changes manually.",
    );
    for follow_up in follow_ups {
        prompter.say(&format!("\n{follow_up}"));
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    let runner = Runner::new(args);
    runner.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integration::Registration;
    use crate::prompt::testing::ScriptedPrompter;
    use clap::Parser;
    use std::cell::RefCell;
    use tempfile::TempDir;

    struct Loadable(bool);

    impl AutoloadChecker for Loadable {
        fn is_loadable(&self, _class: &str) -> bool {
            self.0
        }
    }

    #[derive(Default)]
    struct RecordingRegistrar {
        registered: RefCell<Vec<String>>,
    }

    impl BundleRegistrar for RecordingRegistrar {
        fn register(&self, class: &str) -> Result<Registration> {
            self.registered.borrow_mut().push(class.to_string());
            Ok(Registration::Registered)
        }
    }

    fn args(dir: &TempDir, extra: &[&str]) -> Args {
        let dir = dir.path().to_str().unwrap();
        let mut argv = vec![
            "fieldtype-scaffold",
            "--namespace=Acme/FooBundle",
            "--fieldtype-name=My Field",
            "--fieldtype-namespace=acme",
            "--dir",
            dir,
        ];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn non_interactive_run_generates_and_registers() {
        let dir = TempDir::new().unwrap();
        let runner = Runner::new(args(&dir, &["--non-interactive"]));
        let prompter = ScriptedPrompter::new(&[], &[]);
        let registrar = RecordingRegistrar::default();

        let summary = runner
            .execute(&prompter, &MiniJinjaRenderer::new(), &Loadable(true), &registrar)
            .unwrap()
            .unwrap();

        assert_eq!(summary.report.target_dir, dir.path().join("Acme").join("FooBundle"));
        assert!(summary.report.files.iter().all(|f| f.is_file()));
        assert!(summary.follow_ups.is_empty());
        assert_eq!(registrar.registered.borrow().as_slice(), ["Acme\\FooBundle\\AcmeFooBundle"]);
        assert!(prompter.asked.borrow().is_empty());
    }

    #[test]
    fn declined_kernel_update_leaves_manual_step() {
        let dir = TempDir::new().unwrap();
        let runner = Runner::new(args(&dir, &["--bundle-name=AcmeFooBundle", "--skip-confirms=generation"]));
        let prompter = ScriptedPrompter::new(&[], &[false]);
        let registrar = RecordingRegistrar::default();

        let summary = runner
            .execute(&prompter, &MiniJinjaRenderer::new(), &Loadable(false), &registrar)
            .unwrap()
            .unwrap();

        assert!(registrar.registered.borrow().is_empty());
        assert_eq!(summary.follow_ups.len(), 2);
        assert!(matches!(summary.follow_ups[0], FollowUp::RegisterAutoload { .. }));
        assert!(matches!(summary.follow_ups[1], FollowUp::RegisterManually { .. }));
        assert_eq!(
            prompter.asked.borrow().as_slice(),
            ["Confirm automatic update of your Kernel"]
        );
    }

    #[test]
    fn dry_run_skips_writes_and_integration() {
        let dir = TempDir::new().unwrap();
        let runner = Runner::new(args(&dir, &["--non-interactive", "--dry-run"]));
        let prompter = ScriptedPrompter::new(&[], &[]);
        let registrar = RecordingRegistrar::default();

        let summary = runner
            .execute(&prompter, &MiniJinjaRenderer::new(), &Loadable(false), &registrar)
            .unwrap()
            .unwrap();

        assert!(summary.report.dry_run);
        assert!(!dir.path().join("Acme").exists());
        assert!(registrar.registered.borrow().is_empty());
    }

    #[test]
    fn interactive_target_defaults_to_project_src() {
        let root = TempDir::new().unwrap();
        let runner = Runner::new(Args::parse_from([
            "fieldtype-scaffold",
            "--namespace=Acme/FooBundle",
            "--bundle-name=AcmeFooBundle",
            "--fieldtype-name=My Field",
            "--fieldtype-namespace=acme",
            "--skip-confirms=all",
            "--project-root",
            root.path().to_str().unwrap(),
        ]));
        let prompter = ScriptedPrompter::new(&[""], &[]);

        let summary = runner
            .execute(&prompter, &MiniJinjaRenderer::new(), &Loadable(true), &RecordingRegistrar::default())
            .unwrap()
            .unwrap();

        assert_eq!(summary.report.target_dir, root.path().join("src").join("Acme").join("FooBundle"));
        assert_eq!(prompter.asked.borrow().as_slice(), ["Target directory"]);
    }

    #[test]
    fn kernel_defaults_to_project_root() {
        let runner = Runner::new(Args::parse_from(["fieldtype-scaffold", "--project-root", "/srv/app"]));
        assert_eq!(runner.kernel_file(), PathBuf::from("/srv/app/app/AppKernel.php"));
    }
}
