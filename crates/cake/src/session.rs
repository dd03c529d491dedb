//! Interactive visualization session: one scene, at most one cake.

use crate::attributes::{extract, DesignAttributes};
use crate::builder::build;
use crate::config::CakeConfig;
use crate::error::BuildError;
use crate::fallback::build_fallback;
use crate::scene::{SceneBackend, SceneGraph};
use cake_ir::NodeId;
use std::time::Duration;

/// Result of [`Session::visualize`].
#[derive(Debug, Clone, PartialEq)]
pub enum BuildOutcome {
    /// The prompt was built as designed.
    Built {
        root: NodeId,
        attributes: DesignAttributes,
    },
    /// The designed build failed; the fallback cake is shown instead.
    Fallback { root: NodeId, reason: BuildError },
}

impl BuildOutcome {
    /// Root of whichever cake ended up in the scene.
    pub fn root(&self) -> NodeId {
        match self {
            BuildOutcome::Built { root, .. } | BuildOutcome::Fallback { root, .. } => *root,
        }
    }

    /// Whether the fallback cake was used.
    pub fn is_fallback(&self) -> bool {
        matches!(self, BuildOutcome::Fallback { .. })
    }
}

/// Owns the scene, the current cake and the rotation state.
#[derive(Debug)]
pub struct Session {
    scene: SceneGraph,
    cake: Option<NodeId>,
    rotating: bool,
    rng: fastrand::Rng,
    config: CakeConfig,
}

impl Session {
    /// New session; seeded from `config.session.seed` when set.
    pub fn new(config: CakeConfig) -> Self {
        let rng = match config.session.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Self {
            scene: SceneGraph::new(),
            cake: None,
            rotating: false,
            rng,
            config,
        }
    }

    /// New session with an explicit seed, overriding the config.
    pub fn with_seed(mut config: CakeConfig, seed: u64) -> Self {
        config.session.seed = Some(seed);
        Self::new(config)
    }

    /// Replace the current cake with one built from `prompt`.
    ///
    /// Never fails: a build error is logged and the fallback cake is shown.
    pub fn visualize(&mut self, prompt: &str) -> BuildOutcome {
        self.clear();
        let attributes = extract(prompt);
        match build(&attributes, &mut self.scene, &mut self.rng, &self.config) {
            Ok(root) => {
                self.cake = Some(root);
                BuildOutcome::Built { root, attributes }
            }
            Err(reason) => {
                log::warn!("cake build failed, showing fallback: {reason}");
                let root = build_fallback(&mut self.scene);
                self.cake = Some(root);
                BuildOutcome::Fallback { root, reason }
            }
        }
    }

    /// Dispose the current cake, if any.
    pub fn clear(&mut self) {
        if let Some(old) = self.cake.take() {
            log::debug!("disposing cake {old}");
            if let Err(err) = self.scene.remove_node(old) {
                log::warn!("previous cake already gone: {err}");
            }
        }
    }

    /// Spin the cake on every [`tick`](Self::tick) from now on.
    pub fn start_rotation(&mut self) {
        self.rotating = true;
    }

    /// Stop spinning. The cake keeps its current angle.
    pub fn stop_rotation(&mut self) {
        self.rotating = false;
    }

    /// Whether ticks currently spin the cake.
    pub fn is_rotating(&self) -> bool {
        self.rotating
    }

    /// Advance one frame: spin the cake about Y while rotating.
    pub fn tick(&mut self) {
        if !self.rotating {
            return;
        }
        let Some(cake) = self.cake else {
            return;
        };
        let step = self.config.session.rotation_step;
        let spun = self.scene.transform(cake).and_then(|mut t| {
            t.rotation.y += step;
            self.scene.set_transform(cake, t)
        });
        if let Err(err) = spun {
            log::debug!("cannot spin cake {cake}: {err}");
        }
    }

    /// Current cake root.
    pub fn cake(&self) -> Option<NodeId> {
        self.cake
    }

    /// Scene holding the current cake.
    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    /// Configuration the session was created with.
    pub fn config(&self) -> &CakeConfig {
        &self.config
    }

    /// Pause a front end shows before each build.
    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.config.session.loading_delay_ms)
    }
}
