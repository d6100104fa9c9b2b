//! Shared fixtures for the integration tests: a course builder and a
//! recording player backend.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use lectern_core::error::NavigatorError;
use lectern_core::player::{MountNode, PlayerBackend, PlayerHandle};
use lectern_model::{
    Course, CourseId, Lesson, LessonId, Module, ModuleId, RawDuration, VideoId,
};

/// Capture navigator logs in test output; repeated calls are fine.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Eleven-character tokens used across the scenario courses.
pub const TOKEN_A: &str = "aaaaaaaaaaa";
pub const TOKEN_B: &str = "bbbbbbbbbbb";
pub const TOKEN_C: &str = "ccccccccccc";
pub const TOKEN_D: &str = "ddddddddddd";

pub fn lesson(id: &str, order: u32, token: &str) -> Lesson {
    Lesson {
        id: LessonId::new(id).unwrap(),
        title: format!("Lesson {id}"),
        order,
        video_ref: format!("https://www.youtube.com/watch?v={token}"),
        duration_raw: RawDuration::new(300),
        completed: false,
    }
}

pub fn module(id: &str, order: u32, lessons: Vec<Lesson>) -> Module {
    Module {
        id: ModuleId::new(id).unwrap(),
        title: format!("Module {id}"),
        order,
        lessons,
    }
}

pub fn course(id: &str, modules: Vec<Module>) -> Course {
    Course {
        id: CourseId::new(id).unwrap(),
        title: "Test course".into(),
        modules,
    }
}

/// Two modules, two lessons then one, distinct video tokens. The shape
/// exercised by most navigation scenarios.
pub fn two_module_course() -> Course {
    course(
        "course-1",
        vec![
            module(
                "m1",
                1,
                vec![lesson("l1", 1, TOKEN_A), lesson("l2", 2, TOKEN_B)],
            ),
            module("m2", 2, vec![lesson("l3", 1, TOKEN_C)]),
        ],
    )
}

/// What the backend was asked to do, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    Create { video: String, epoch: u64 },
    Destroy { video: String },
}

#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<BackendCall>>>);

impl CallLog {
    pub fn push(&self, call: BackendCall) {
        self.0.lock().unwrap().push(call);
    }

    pub fn take(&self) -> Vec<BackendCall> {
        std::mem::take(&mut self.0.lock().unwrap())
    }

    pub fn snapshot(&self) -> Vec<BackendCall> {
        self.0.lock().unwrap().clone()
    }

    pub fn creations(&self) -> Vec<String> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter_map(|call| match call {
                BackendCall::Create { video, .. } => Some(video.clone()),
                BackendCall::Destroy { .. } => None,
            })
            .collect()
    }
}

/// Backend that records every construction and destruction.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    pub log: CallLog,
}

impl RecordingBackend {
    pub fn new() -> (Box<dyn PlayerBackend>, CallLog) {
        let backend = RecordingBackend::default();
        let log = backend.log.clone();
        (Box::new(backend), log)
    }
}

impl PlayerBackend for RecordingBackend {
    fn create(
        &mut self,
        _node: &MountNode,
        video: &VideoId,
        epoch: u64,
    ) -> Result<Box<dyn PlayerHandle>, NavigatorError> {
        self.log.push(BackendCall::Create {
            video: video.as_str().to_owned(),
            epoch,
        });
        Ok(Box::new(RecordingHandle {
            video: video.clone(),
            log: self.log.clone(),
            destroyed: false,
        }))
    }
}

#[derive(Debug)]
struct RecordingHandle {
    video: VideoId,
    log: CallLog,
    destroyed: bool,
}

impl PlayerHandle for RecordingHandle {
    fn video(&self) -> &VideoId {
        &self.video
    }

    fn destroy(&mut self) {
        if !self.destroyed {
            self.destroyed = true;
            self.log.push(BackendCall::Destroy {
                video: self.video.as_str().to_owned(),
            });
        }
    }
}
