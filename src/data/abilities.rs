#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ability {
    /// No effect in battle.
    #[default]
    Plain,
    /// Sleep counter advances twice per attempted move.
    EarlyBird,
    /// 3/10 chance to cure a major status at the end of each turn.
    ShedSkin,
    /// Raises the critical hit stage by one.
    SuperLuck,
    /// Moves used by or against this Pokémon cannot miss.
    NoGuard,
    /// Immune to Ground-type moves and grounded entry hazards.
    Levitate,
    /// Opposing moves cost one extra PP.
    Pressure,
    /// Lowers the opposing active Pokémon's Attack by one stage on switch-in.
    Intimidate,
    /// Summons a sandstorm on switch-in.
    SandStream,
}

impl Ability {
    pub fn get_name(&self) -> &'static str {
        match self {
            Ability::Plain => "(none)",
            Ability::EarlyBird => "Early Bird",
            Ability::ShedSkin => "Shed Skin",
            Ability::SuperLuck => "Super Luck",
            Ability::NoGuard => "No Guard",
            Ability::Levitate => "Levitate",
            Ability::Pressure => "Pressure",
            Ability::Intimidate => "Intimidate",
            Ability::SandStream => "Sand Stream",
        }
    }
}
