//! File-name identity parsing.
//!
//! Result directories routinely hold partial files or leftovers from other
//! runs, so nothing here fails: an unrecognised name is simply `None`.

use crate::model::Scenario;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Identity carried by a `psnr_<video>_ue<N>_s<M>.txt` file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PsnrIdentity {
    pub video: String,
    pub ue: u32,
    pub scenario: Scenario,
}

fn largura_ue_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"ue(\d+)\.txt$").expect("static regex"))
}

fn file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|n| n.to_str())
}

/// Parse `psnr_<video>_ue<N>_s<M>.txt`.
///
/// The UE and scenario are taken from the last two segments, so a video name
/// may itself contain underscores (`psnr_big_buck_ue1_s0.txt`).
pub(crate) fn parse_psnr_name(path: &Path) -> Option<PsnrIdentity> {
    let stem = file_name(path)?.strip_suffix(".txt")?;
    let parts: Vec<&str> = stem.split('_').collect();
    if parts.len() < 4 || parts[0] != "psnr" {
        return None;
    }
    let n = parts.len();
    let ue = parts[n - 2].strip_prefix("ue")?.parse::<u32>().ok()?;
    let scenario = parts[n - 1].strip_prefix('s')?.parse::<u32>().ok()?;
    let video = parts[1..n - 2].join("_");
    if video.is_empty() {
        return None;
    }
    Some(PsnrIdentity {
        video,
        ue,
        scenario: Scenario::from(scenario),
    })
}

/// UE index from a `..._largura_ue<N>.txt` file name.
pub(crate) fn parse_largura_ue(path: &Path) -> Option<u32> {
    let caps = largura_ue_re().captures(file_name(path)?)?;
    caps[1].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn psnr_name_yields_video_ue_and_scenario() {
        let id = parse_psnr_name(Path::new("results/scenario_0/psnr_harbour_ue0_s0.txt")).unwrap();
        assert_eq!(
            id,
            PsnrIdentity {
                video: "harbour".into(),
                ue: 0,
                scenario: Scenario::new("0"),
            }
        );
    }

    #[test]
    fn psnr_scenario_comes_from_the_name_not_the_directory() {
        let id = parse_psnr_name(Path::new("results/scenario_0/psnr_crew_ue3_s1.txt")).unwrap();
        assert_eq!(id.scenario, Scenario::new("1"));
        assert_eq!(id.ue, 3);
    }

    #[test]
    fn psnr_video_with_underscores_is_kept_whole() {
        let id = parse_psnr_name(Path::new("psnr_big_buck_ue12_s0.txt")).unwrap();
        assert_eq!(id.video, "big_buck");
        assert_eq!(id.ue, 12);
    }

    #[test]
    fn malformed_psnr_names_are_skipped() {
        for name in [
            "psnr_harbour_ue0.txt",
            "psnr_harbour_ueX_s0.txt",
            "psnr_harbour_ue0_sB.txt",
            "psnr_harbour_0_s0.txt",
            "psnr_harbour_ue0_s0.csv",
            "rd_harbour_ue0_s0.txt",
        ] {
            assert_eq!(parse_psnr_name(&PathBuf::from(name)), None, "{name}");
        }
    }

    #[test]
    fn largura_ue_index_is_trailing_anchored() {
        assert_eq!(parse_largura_ue(Path::new("s0_QoS_drops_largura_ue2.txt")), Some(2));
        assert_eq!(parse_largura_ue(Path::new("s1_QoS_drops_largura_ue17.txt")), Some(17));
        assert_eq!(parse_largura_ue(Path::new("s0_QoS_drops_largura_ue2.txt.bak")), None);
        assert_eq!(parse_largura_ue(Path::new("s0_QoS_drops_largura.txt")), None);
    }

    #[test]
    fn parsing_is_repeatable() {
        let p = Path::new("psnr_crew_ue1_s1.txt");
        assert_eq!(parse_psnr_name(p), parse_psnr_name(p));
    }
}
