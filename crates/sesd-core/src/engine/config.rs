use serde::Deserialize;

/// Which surface definition the pipeline produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceMode {
    /// Solvent-accessible surface: the rasterized atom + probe volume is
    /// used directly.
    Sas,
    /// Solvent-excluded surface: the accessible volume is eroded by one
    /// probe radius before surface extraction.
    Ses,
}

/// Parameters of the surface pipeline.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SurfaceConfig {
    pub mode: SurfaceMode,
    /// Voxel edge length in Ångströms.
    pub step: f64,
    /// Solvent probe radius in Ångströms.
    pub probe: f64,
    /// Worker threads for the parallel passes; 0 uses the global pool.
    #[serde(default)]
    pub threads: usize,
}

impl SurfaceConfig {
    pub fn ses(step: f64, probe: f64) -> Self {
        Self {
            mode: SurfaceMode::Ses,
            step,
            probe,
            threads: 0,
        }
    }

    pub fn sas(step: f64, probe: f64) -> Self {
        Self {
            mode: SurfaceMode::Sas,
            step,
            probe,
            threads: 0,
        }
    }
}

/// Parameters of the interface-residue query. Step and probe must match the
/// values the surface grid was produced with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InterfaceConfig {
    pub step: f64,
    pub probe: f64,
    #[serde(default)]
    pub threads: usize,
}

impl InterfaceConfig {
    pub fn new(step: f64, probe: f64) -> Self {
        Self {
            step,
            probe,
            threads: 0,
        }
    }
}
