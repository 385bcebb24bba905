use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{Clock, ReportService};
use status_core::time::fixed_now;
use storage::repository::{KeyValueStore, Storage};

use crate::context::{UiApp, build_app_context};
use crate::views::ReportsView;

use super::reports::{ReportsController, reports_page, use_reports_controller};

#[derive(Clone)]
struct TestApp {
    reports: Arc<ReportService>,
    export_dir: PathBuf,
}

impl UiApp for TestApp {
    fn reports(&self) -> Arc<ReportService> {
        Arc::clone(&self.reports)
    }

    fn export_dir(&self) -> PathBuf {
        self.export_dir.clone()
    }
}

/// Exposes the page controller so tests can press buttons without a renderer.
#[derive(Clone, Default)]
pub struct ControllerHandles {
    controller: Rc<RefCell<Option<ReportsController>>>,
}

impl ControllerHandles {
    pub fn controller(&self) -> ReportsController {
        (*self.controller.borrow()).expect("controller registered")
    }
}

impl PartialEq for ControllerHandles {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.controller, &other.controller)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: Option<ControllerHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    match use_context::<Option<ControllerHandles>>() {
        Some(handles) => rsx! { ControlledReports { handles } },
        None => rsx! { ReportsView {} },
    }
}

#[component]
fn ControlledReports(handles: ControllerHandles) -> Element {
    let controller = use_reports_controller();
    use_hook(|| *handles.controller.borrow_mut() = Some(controller));
    reports_page(controller)
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub reports: Arc<ReportService>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive until spawned tasks and the resources they restart have finished.
    pub async fn settle(&mut self) {
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    /// Run `f` inside the dom's runtime, then process what it triggered.
    pub fn act<O>(&mut self, f: impl FnOnce() -> O) -> O {
        let out = self.dom.in_runtime(f);
        drive_dom(&mut self.dom);
        out
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness() -> ViewHarness {
    setup_view_harness_with_store(Arc::clone(&Storage::in_memory().local))
}

pub fn setup_view_harness_with_store(local: Arc<dyn KeyValueStore>) -> ViewHarness {
    build_harness(local, None)
}

pub fn setup_controlled_harness() -> (ViewHarness, ControllerHandles) {
    let handles = ControllerHandles::default();
    let harness = build_harness(
        Arc::clone(&Storage::in_memory().local),
        Some(handles.clone()),
    );
    (harness, handles)
}

fn build_harness(
    local: Arc<dyn KeyValueStore>,
    handles: Option<ControllerHandles>,
) -> ViewHarness {
    let reports = Arc::new(ReportService::new(Clock::fixed(fixed_now()), local));
    let app = Arc::new(TestApp {
        reports: Arc::clone(&reports),
        export_dir: std::env::temp_dir(),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, handles });

    ViewHarness { dom, reports }
}
