use crate::data::{level_catalog, verb_table};
use crate::exercise::ExerciseEngine;
use crate::session::{AnswerFeedback, SessionPhase, SessionState};
use crate::verbs::{Level, TenseId};
use eframe::egui;
use log::{debug, warn};
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

/// How long the ✓/✗ flash stays on screen
pub const FEEDBACK_DURATION: Duration = Duration::from_secs(1);
/// Delay before advancing (correct) or opening the lesson (incorrect)
pub const TRANSITION_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    NextExercise,
    ShowLesson,
}

pub struct VerbPracticeApp {
    engine: ExerciseEngine<'static>,
    rng: StdRng,
    state: SessionState,
    selected_answer: Option<String>,
    feedback: Option<AnswerFeedback>,
    feedback_until: Option<Instant>,
    pending: Option<(Instant, Transition)>,
    lesson_open: bool,
    error: Option<String>,
}

impl VerbPracticeApp {
    pub fn new(rng: StdRng) -> Self {
        Self {
            engine: ExerciseEngine::new(verb_table()),
            rng,
            state: SessionState::new(),
            selected_answer: None,
            feedback: None,
            feedback_until: None,
            pending: None,
            lesson_open: false,
            error: None,
        }
    }

    pub fn select_level(&mut self, level: Level) {
        self.state = self.state.select_level(level);
        self.error = None;
    }

    pub fn start_practice(&mut self, tense: TenseId) {
        match self
            .state
            .start_practice(&self.engine, &mut self.rng, tense)
        {
            Ok(state) => {
                self.state = state;
                self.clear_answer_ui();
            }
            Err(err) => {
                warn!("Could not start practice for {}: {}", tense, err);
                self.error = Some(err.to_string());
            }
        }
    }

    /// Submits `answer` and schedules what follows it
    pub fn choose_answer(&mut self, answer: &str, now: Instant) {
        match self.state.submit_answer(answer) {
            Ok((state, feedback)) => {
                let transition = if feedback.is_correct() {
                    Transition::NextExercise
                } else {
                    Transition::ShowLesson
                };
                self.state = state;
                self.selected_answer = Some(answer.to_string());
                self.feedback = Some(feedback);
                self.feedback_until = Some(now + FEEDBACK_DURATION);
                self.pending = Some((now + TRANSITION_DELAY, transition));
            }
            Err(err) => debug!("Ignoring answer '{}': {}", answer, err),
        }
    }

    /// Applies any timed transition whose deadline has passed
    pub fn tick(&mut self, now: Instant) {
        if self.feedback_until.is_some_and(|until| until <= now) {
            self.feedback_until = None;
        }

        if let Some((deadline, transition)) = self.pending {
            if deadline <= now {
                self.pending = None;
                match transition {
                    Transition::NextExercise => self.next_exercise(),
                    Transition::ShowLesson => self.lesson_open = true,
                }
            }
        }
    }

    pub fn next_exercise(&mut self) {
        match self.state.next_exercise(&self.engine, &mut self.rng) {
            Ok(state) => {
                self.state = state;
                self.clear_answer_ui();
            }
            Err(err) => {
                warn!("Could not generate the next exercise: {}", err);
                self.error = Some(err.to_string());
            }
        }
    }

    pub fn close_lesson(&mut self) {
        self.lesson_open = false;
    }

    pub fn continue_after_lesson(&mut self) {
        self.lesson_open = false;
        self.next_exercise();
    }

    pub fn go_back(&mut self) {
        self.state = self.state.go_back();
        self.clear_answer_ui();
        self.error = None;
    }

    fn clear_answer_ui(&mut self) {
        self.selected_answer = None;
        self.feedback = None;
        self.feedback_until = None;
        self.pending = None;
        self.lesson_open = false;
    }

    // Helper methods for testing
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_lesson_open(&self) -> bool {
        self.lesson_open
    }

    pub fn is_feedback_visible(&self) -> bool {
        self.feedback_until.is_some()
    }

    pub fn pending_transition(&self) -> Option<Transition> {
        self.pending.map(|(_, transition)| transition)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn show_selection(&mut self, ui: &mut egui::Ui) {
        let mut chosen_level = None;
        let mut chosen_tense = None;

        ui.label("Choose your level:");
        ui.horizontal(|ui| {
            for level in level_catalog().levels() {
                let selected = self.state.level == Some(level);
                if ui.selectable_label(selected, level.as_str()).clicked() {
                    chosen_level = Some(level);
                }
            }
        });

        if let Some(level) = self.state.level {
            ui.add_space(20.0);
            ui.label("Choose a tense:");
            ui.horizontal_wrapped(|ui| {
                for descriptor in level_catalog().tenses_for(level) {
                    if ui
                        .button(descriptor.display_name.as_str())
                        .on_hover_text(descriptor.description.as_str())
                        .clicked()
                    {
                        chosen_tense = Some(descriptor.id);
                    }
                }
            });
        }

        if let Some(error) = &self.error {
            ui.add_space(10.0);
            ui.colored_label(egui::Color32::RED, error.as_str());
        }

        if let Some(level) = chosen_level {
            self.select_level(level);
        }
        if let Some(tense) = chosen_tense {
            self.start_practice(tense);
        }
    }

    fn show_exercise(&mut self, ui: &mut egui::Ui) {
        let mut back = false;
        let mut chosen = None;
        let mut next = false;

        ui.horizontal(|ui| {
            if ui.button("← Back").clicked() {
                back = true;
            }
            if let Some(descriptor) = self.state.tense.and_then(|t| level_catalog().describe(t)) {
                ui.label(egui::RichText::new(descriptor.display_name.as_str()).strong());
            }
            ui.separator();
            ui.label(format!("Score: {}", self.state.score));
            ui.label(format!("Streak: {}", self.state.streak));
        });
        ui.add_space(20.0);

        if let Some(exercise) = &self.state.exercise {
            ui.label("Complete the sentence:");
            ui.heading(
                egui::RichText::new(exercise.question.as_str())
                    .size(28.0)
                    .strong(),
            );
            ui.add_space(20.0);

            let answered = self.state.phase == SessionPhase::Answered;
            for option in &exercise.options {
                let mut button =
                    egui::Button::new(option.as_str()).min_size(egui::vec2(260.0, 32.0));
                if answered {
                    if *option == exercise.correct_answer {
                        button = button.fill(egui::Color32::DARK_GREEN);
                    } else if self.selected_answer.as_ref() == Some(option) {
                        button = button.fill(egui::Color32::DARK_RED);
                    }
                }
                if ui.add_enabled(!answered, button).clicked() {
                    chosen = Some(option.clone());
                }
            }

            ui.add_space(10.0);
            if self.is_feedback_visible() {
                match &self.feedback {
                    Some(AnswerFeedback::Correct) => {
                        ui.label(
                            egui::RichText::new("✓")
                                .size(48.0)
                                .color(egui::Color32::GREEN),
                        );
                    }
                    Some(AnswerFeedback::Incorrect { .. }) => {
                        ui.label(egui::RichText::new("✗").size(48.0).color(egui::Color32::RED));
                    }
                    None => {}
                }
            } else if answered && self.pending.is_none() && !self.lesson_open {
                next = ui.button("Next exercise").clicked();
            }
        }

        if let Some(error) = &self.error {
            ui.colored_label(egui::Color32::RED, error.as_str());
        }

        if back {
            self.go_back();
        } else if let Some(answer) = chosen {
            self.choose_answer(&answer, Instant::now());
        } else if next {
            self.next_exercise();
        }
    }

    fn show_lesson(&mut self, ctx: &egui::Context) {
        let Some(exercise) = self.state.exercise.clone() else {
            return;
        };
        let Ok(entry) = self.engine.table().get(exercise.verb) else {
            return;
        };

        let mut open = true;
        let mut continue_clicked = false;
        egui::Window::new(exercise.lesson.title.as_str())
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(format!(
                    "Translation: {} ({} verb)",
                    exercise.translation, entry.kind
                ));
                ui.label(exercise.lesson.explanation.as_str());
                ui.label(egui::RichText::new(exercise.lesson.usage.as_str()).italics());
                ui.separator();

                ui.label(egui::RichText::new("Full Conjugation").strong());
                if let Ok(conjugation) = entry.conjugation(exercise.tense) {
                    egui::Grid::new("conjugation_table")
                        .striped(true)
                        .show(ui, |ui| {
                            for (pronoun, form) in conjugation {
                                ui.label(pronoun.label());
                                ui.label(form.as_str());
                                ui.end_row();
                            }
                        });
                }

                ui.add_space(10.0);
                if ui.button("Continue").clicked() {
                    continue_clicked = true;
                }
            });

        if continue_clicked {
            self.continue_after_lesson();
        } else if !open {
            self.close_lesson();
        }
    }
}

impl eframe::App for VerbPracticeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.tick(Instant::now());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Verb Practice - Italian Conjugations");
            ui.add_space(20.0);

            match self.state.phase {
                SessionPhase::ChoosingLevel | SessionPhase::ChoosingTense => {
                    self.show_selection(ui)
                }
                SessionPhase::Answering | SessionPhase::Answered => self.show_exercise(ui),
            }
        });

        if self.lesson_open {
            self.show_lesson(ctx);
        }

        if self.pending.is_some() || self.feedback_until.is_some() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

pub fn run_app(
    level: Option<Level>,
    tense: Option<TenseId>,
    rng: StdRng,
) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([640.0, 560.0]),
        ..Default::default()
    };

    let mut app = VerbPracticeApp::new(rng);
    if let Some(level) = level {
        app.select_level(level);
    }
    if let Some(tense) = tense {
        app.start_practice(tense);
    }

    eframe::run_native(
        "Verb Practice",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
}
