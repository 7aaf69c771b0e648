//! The built-in celestial ladder: eight ranks across three phases.

use super::table::{LadderError, RankDefinition, RankTable, SubLevelLore};

struct RankSeed {
    name: &'static str,
    points_per_sub_level: u64,
    phase_label: &'static str,
    theme: &'static str,
    synthesis_text: &'static str,
    /// `(psyche, description)` in the order the sub-levels are reached.
    lore: &'static [(&'static str, &'static str)],
}

const DEPARTURE: (&str, &str) = ("The Departure", "Observation & Grounding");
const IGNITION: (&str, &str) = ("The Ignition", "Formation & Endurance");
const TRANSCENDENCE: (&str, &str) = ("The Transcendence", "Systemic Connection");

const CELESTIAL: [RankSeed; 8] = [
    RankSeed {
        name: "Observer",
        points_per_sub_level: 20,
        phase_label: DEPARTURE.0,
        theme: DEPARTURE.1,
        synthesis_text: "You learn to watch your own mind from a distance.",
        lore: &[
            ("The Separation", "You begin to separate the thinker from the thought. You are stepping back from the noise to simply watch."),
            ("The Pattern Recognition", "Through your entries, constellations of behavior appear. You notice the cycles you used to repeat blindly."),
            ("The Orbital View", "You have achieved distance. Your problems look smaller from here; you are watching your life rather than just reacting to it."),
        ],
    },
    RankSeed {
        name: "Moonwalker",
        points_per_sub_level: 50,
        phase_label: DEPARTURE.0,
        theme: DEPARTURE.1,
        synthesis_text: "You walk the unfamiliar terrain of your inner world.",
        lore: &[
            ("The First Step", "You leave the gravity of your comfort zone. The terrain of your inner world is grey and unfamiliar, but you are walking it."),
            ("The Crater Study", "You explore the impact sites of your past. You realize that scars are just geography, not definitions."),
            ("The Earthrise", "Looking back at your old self from a distance, you feel a profound shift in perspective. You are not who you were."),
        ],
    },
    RankSeed {
        name: "Celestial",
        points_per_sub_level: 80,
        phase_label: IGNITION.0,
        theme: IGNITION.1,
        synthesis_text: "Your fragments coalesce into a body with its own gravity.",
        lore: &[
            ("The Accretion", "You are gathering your fragmented parts. Memories and hopes coalesce into a solid, spherical identity."),
            ("The Atmosphere", "You develop a protective layer. Your journal burns up the meteors of daily stress before they can strike the surface."),
            ("The Axis", "You find your tilt. You accept your seasons, the cold winters and warm summers, as necessary cycles."),
            ("The Gravity", "You now possess weight. You do not chase orbit; you attract what belongs to you through the power of your core."),
        ],
    },
    RankSeed {
        name: "Stellar",
        points_per_sub_level: 100,
        phase_label: IGNITION.0,
        theme: IGNITION.1,
        synthesis_text: "Pressure turns to fusion and you begin to shine.",
        lore: &[
            ("The Protostar", "Pressure builds. You realize that the crushing weight of life is actually the fuel for your ignition."),
            ("The Fusion", "Alchemy. You take the hydrogen of your pain and fuse it into the helium of wisdom. You are generating heat."),
            ("The Photosphere", "You stop reflecting the light of others and begin to radiate your own. Your authenticity is becoming visible."),
            ("The Main Sequence", "Stability. You burn steadily and brightly. You have found the fuel source that will sustain you for a lifetime."),
        ],
    },
    RankSeed {
        name: "Interstellar",
        points_per_sub_level: 120,
        phase_label: IGNITION.0,
        theme: IGNITION.1,
        synthesis_text: "You leave known systems and trust your own compass.",
        lore: &[
            ("The Departure", "You leave the safety of known systems. You journal about the unknown, facing the deep silence between chapters of your life."),
            ("The Dark Nebula", "You navigate through the clouds that obscure vision. You learn to trust your internal compass when you cannot see the stars."),
            ("Time Dilation", "You realize healing is relative. A moment of realization can undo years of stagnation. You travel at your own speed."),
            ("The Event Horizon", "You approach a point of no return. The insights you have gained are about to pull you into a new reality."),
        ],
    },
    RankSeed {
        name: "Galactic",
        points_per_sub_level: 150,
        phase_label: TRANSCENDENCE.0,
        theme: TRANSCENDENCE.1,
        synthesis_text: "Past, present and future resolve into one spiral.",
        lore: &[
            ("The Spiral Arm", "You see the structure. Childhood trauma, present joy, and future hope are all connected in one great spiral."),
            ("The Rotation", "You stop fighting the current. You spin with the galaxy, accepting the flow of uncontrollable events."),
            ("Dark Matter", "You acknowledge the invisible forces, the subconscious drives, that hold your visible life together."),
            ("The Supermassive", "You face the void at your center. You realize it is not emptiness, but infinite density and potential."),
            ("The System", "You are not a solitary star. You contain billions of moments, a complex ecosystem of self."),
        ],
    },
    RankSeed {
        name: "Intergalactic",
        points_per_sub_level: 180,
        phase_label: TRANSCENDENCE.0,
        theme: TRANSCENDENCE.1,
        synthesis_text: "Your story joins the web of every other story.",
        lore: &[
            ("The Filament", "You sense the web. Through writing, you connect your story to the universal human experience."),
            ("The Drift", "There is no up or down in the cosmos. You release the need for rigid definitions of success or failure."),
            ("Redshift", "You are expanding. You are moving away from your origin point so fast that the light of the past changes color."),
            ("The Great Attractor", "You are pulled toward a destiny you cannot see but can feel. You trust the pull."),
            ("The Cosmic Scale", "Ego death. Your daily anxieties are merely dust against the background radiation of your spirit."),
        ],
    },
    RankSeed {
        name: "Ethereal",
        points_per_sub_level: 200,
        phase_label: TRANSCENDENCE.0,
        theme: TRANSCENDENCE.1,
        synthesis_text: "You become the author of the universe you write.",
        lore: &[
            ("The Nebula", "Form becomes fluid. You realize you can reshape your narrative at will. You are the cloud before the star."),
            ("Quantum Superposition", "You accept contradiction. You can be both sad and grateful, lost and found, simultaneously."),
            ("Entanglement", "You understand that nothing is separate. Your past self and future self are communicating across time."),
            ("The Singularity", "Focus becomes infinite. The barrier between the writer and the written word dissolves."),
            ("The Big Bang", "Creation. You speak, and a new universe is born. You are the author of your reality."),
            ("The Source", "You return to the beginning, but with full knowledge. You are the Universe experiencing itself."),
        ],
    },
];

/// Rank definitions for the celestial ladder, thresholds not yet accumulated.
pub fn celestial_ranks() -> Vec<RankDefinition> {
    CELESTIAL
        .iter()
        .map(|seed| {
            let lore = seed
                .lore
                .iter()
                .map(|(psyche, description)| SubLevelLore {
                    psyche: (*psyche).to_string(),
                    description: (*description).to_string(),
                })
                .collect::<Vec<_>>();
            RankDefinition::new(seed.name, lore.len() as u32, seed.points_per_sub_level)
                .with_phase(seed.phase_label, seed.theme)
                .with_synthesis(seed.synthesis_text)
                .with_lore(lore)
        })
        .collect()
}

/// The validated celestial ladder.
pub fn celestial_table() -> Result<RankTable, LadderError> {
    RankTable::new(celestial_ranks())
}
