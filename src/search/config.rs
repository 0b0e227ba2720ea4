// Configuração da busca: nível de dificuldade e semente opcional.

use std::fmt;

/// Nível de dificuldade de 1 a 6. O nível 1 joga lances aleatórios;
/// os restantes procuram até à profundidade igual ao nível.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    /// Valores fora do intervalo são ajustados ao limite mais próximo.
    pub fn new(level: u8) -> Self {
        Difficulty(level.clamp(Self::MIN, Self::MAX))
    }

    pub fn level(self) -> u8 {
        self.0
    }

    pub fn depth(self) -> u8 {
        self.0
    }

    pub fn is_random(self) -> bool {
        self.0 == Self::MIN
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Beginner (Random moves)",
            2 => "Easy (Depth 2)",
            3 => "Medium (Depth 3)",
            4 => "Hard (Depth 4)",
            5 => "Expert (Depth 5)",
            _ => "Master (Depth 6)",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty(3)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Configuração de um motor de busca.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchConfig {
    pub difficulty: Difficulty,
    /// Semente para o nível aleatório; sem semente o gerador é semeado pela entropia do sistema.
    pub seed: Option<u64>,
}

impl SearchConfig {
    pub fn with_difficulty(level: u8) -> Self {
        SearchConfig { difficulty: Difficulty::new(level), ..Self::default() }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
