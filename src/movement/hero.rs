//! Movement domain: a motion model wired to its collaborators, and the
//! dual-clock loop that drives it outside of an engine.

use crate::movement::{
    AnimationSink, CameraFollowable, Collaborator, ContactDetector, ContactDetectors, DualClock,
    HeroError, InputOrchestrator, MotionControl, MotionModel, MovementInput, MovementTuning,
    NullAnimation, PhysicsBody,
};

/// A motion model that owns its detectors, body, camera target and
/// animation sink.
#[derive(Debug)]
pub struct Hero<G, L, R, B, A = NullAnimation> {
    model: MotionModel,
    detectors: ContactDetectors<G, L, R>,
    body: B,
    camera: CameraFollowable,
    animation: A,
}

impl<G, L, R, B, A> Hero<G, L, R, B, A>
where
    G: ContactDetector,
    L: ContactDetector,
    R: ContactDetector,
    B: PhysicsBody,
    A: AnimationSink,
{
    pub fn fixed_step(&mut self, dt: f32) {
        self.model.fixed_step(
            dt,
            &self.detectors,
            &mut self.body,
            &mut self.camera,
            &mut self.animation,
        );
    }

    /// Back to the spawn state at the body's current position.
    pub fn respawn(&mut self) {
        self.model.reset();
        self.body.set_velocity(bevy::math::Vec2::ZERO);
        self.camera = CameraFollowable::at(self.body.position());
    }

    pub fn model(&self) -> &MotionModel {
        &self.model
    }

    pub fn detectors(&self) -> &ContactDetectors<G, L, R> {
        &self.detectors
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    pub fn camera(&self) -> &CameraFollowable {
        &self.camera
    }

    pub fn animation(&self) -> &A {
        &self.animation
    }
}

impl<G, L, R, B, A> MotionControl for Hero<G, L, R, B, A> {
    fn set_move_direction(&mut self, x: f32) {
        self.model.set_move_direction(x);
    }

    fn jump_start(&mut self, level: usize) {
        self.model.jump_start(level);
    }

    fn stop_jump_impulsion(&mut self) {
        self.model.stop_jump_impulsion();
    }

    fn dash(&mut self) {
        self.model.dash();
    }

    fn is_touching_ground(&self) -> bool {
        self.model.is_touching_ground()
    }

    fn is_jumping(&self) -> bool {
        self.model.is_jumping()
    }

    fn is_jump_impulsing(&self) -> bool {
        self.model.is_jump_impulsing()
    }

    fn is_jump_min_duration_reached(&self) -> bool {
        self.model.is_jump_min_duration_reached()
    }

    fn multi_jump_count_max(&self) -> usize {
        self.model.multi_jump_count_max()
    }
}

/// Collects a hero's collaborators; `build` refuses to run without all of them.
#[derive(Debug)]
pub struct HeroBuilder<G, L, R, B, A = NullAnimation> {
    tuning: MovementTuning,
    ground: Option<G>,
    left_wall: Option<L>,
    right_wall: Option<R>,
    body: Option<B>,
    animation: A,
}

impl<G, L, R, B> HeroBuilder<G, L, R, B, NullAnimation> {
    pub fn new(tuning: MovementTuning) -> Self {
        Self {
            tuning,
            ground: None,
            left_wall: None,
            right_wall: None,
            body: None,
            animation: NullAnimation,
        }
    }
}

impl<G, L, R, B, A> HeroBuilder<G, L, R, B, A> {
    pub fn ground_detector(mut self, detector: G) -> Self {
        self.ground = Some(detector);
        self
    }

    pub fn left_wall_detector(mut self, detector: L) -> Self {
        self.left_wall = Some(detector);
        self
    }

    pub fn right_wall_detector(mut self, detector: R) -> Self {
        self.right_wall = Some(detector);
        self
    }

    pub fn body(mut self, body: B) -> Self {
        self.body = Some(body);
        self
    }

    pub fn animation<A2>(self, animation: A2) -> HeroBuilder<G, L, R, B, A2> {
        HeroBuilder {
            tuning: self.tuning,
            ground: self.ground,
            left_wall: self.left_wall,
            right_wall: self.right_wall,
            body: self.body,
            animation,
        }
    }

    pub fn build(self) -> Result<Hero<G, L, R, B, A>, HeroError>
    where
        B: PhysicsBody,
    {
        let ground = self
            .ground
            .ok_or(HeroError::MissingCollaborator(Collaborator::GroundDetector))?;
        let left_wall = self
            .left_wall
            .ok_or(HeroError::MissingCollaborator(Collaborator::LeftWallDetector))?;
        let right_wall = self
            .right_wall
            .ok_or(HeroError::MissingCollaborator(Collaborator::RightWallDetector))?;
        let body = self
            .body
            .ok_or(HeroError::MissingCollaborator(Collaborator::PhysicsBody))?;

        let model = MotionModel::new(self.tuning)?;
        let camera = CameraFollowable::at(body.position());
        Ok(Hero {
            model,
            detectors: ContactDetectors {
                ground,
                left_wall,
                right_wall,
            },
            body,
            camera,
            animation: self.animation,
        })
    }
}

/// Explicit dual-clock loop: each frame first runs the fixed steps that are
/// due, then the input orchestrator once with the frame's own elapsed time.
#[derive(Debug)]
pub struct HeroSimulation<G, L, R, B, A = NullAnimation> {
    clock: DualClock,
    orchestrator: InputOrchestrator,
    hero: Hero<G, L, R, B, A>,
}

impl<G, L, R, B, A> HeroSimulation<G, L, R, B, A>
where
    G: ContactDetector,
    L: ContactDetector,
    R: ContactDetector,
    B: PhysicsBody,
    A: AnimationSink,
{
    pub fn new(clock: DualClock, hero: Hero<G, L, R, B, A>) -> Self {
        let orchestrator = InputOrchestrator::new(hero.model().tuning());
        Self {
            clock,
            orchestrator,
            hero,
        }
    }

    /// Advance by one rendered frame; returns the number of fixed steps run.
    pub fn frame(&mut self, frame_dt: f32, input: &MovementInput) -> u32 {
        let steps = self.clock.advance(frame_dt);
        let fixed_dt = self.clock.fixed_dt();
        for _ in 0..steps {
            self.hero.fixed_step(fixed_dt);
        }
        self.orchestrator.frame(frame_dt, input, &mut self.hero);
        steps
    }

    pub fn respawn(&mut self) {
        self.clock.reset();
        self.orchestrator.reset();
        self.hero.respawn();
    }

    pub fn clock(&self) -> &DualClock {
        &self.clock
    }

    pub fn orchestrator(&self) -> &InputOrchestrator {
        &self.orchestrator
    }

    pub fn hero(&self) -> &Hero<G, L, R, B, A> {
        &self.hero
    }

    pub fn hero_mut(&mut self) -> &mut Hero<G, L, R, B, A> {
        &mut self.hero
    }
}
