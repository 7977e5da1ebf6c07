//! Music font symbols
//!
//! Each [`MusicFontSymbol`] names one notation glyph. Code points follow
//! the SMuFL layout (Private Use Area, U+E000 upwards), which is what the
//! embedded music font and the outline tables are keyed on.

use serde::{Deserialize, Serialize};

/// Notation glyph identifiers
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MusicFontSymbol {
    /// Placeholder for "no glyph"; never drawn
    None,

    // Clefs
    GClef,
    CClef,
    FClef,
    UnpitchedPercussionClef1,
    SixStringTabClef,
    FourStringTabClef,

    // Time signatures
    TimeSig0,
    TimeSig1,
    TimeSig2,
    TimeSig3,
    TimeSig4,
    TimeSig5,
    TimeSig6,
    TimeSig7,
    TimeSig8,
    TimeSig9,
    TimeSigCommon,
    TimeSigCutCommon,

    // Noteheads
    NoteheadDoubleWhole,
    NoteheadWhole,
    NoteheadHalf,
    NoteheadBlack,
    NoteheadXBlack,
    NoteheadDiamondBlack,

    AugmentationDot,

    // Flags
    FlagEighthUp,
    FlagEighthDown,
    Flag16thUp,
    Flag16thDown,
    Flag32ndUp,
    Flag32ndDown,
    Flag64thUp,
    Flag64thDown,

    // Accidentals
    AccidentalFlat,
    AccidentalNatural,
    AccidentalSharp,
    AccidentalDoubleSharp,
    AccidentalDoubleFlat,

    // Articulations
    ArticAccentAbove,
    ArticStaccatoAbove,
    ArticTenutoAbove,
    ArticMarcatoAbove,
    FermataAbove,

    // Rests
    RestWhole,
    RestHalf,
    RestQuarter,
    RestEighth,
    Rest16th,
    Rest32nd,
    Rest64th,

    // Dynamics
    DynamicPiano,
    DynamicMezzo,
    DynamicForte,
    DynamicSforzando,
    DynamicZ,

    // Ornaments
    OrnamentTrill,
    OrnamentTurn,
    OrnamentShortTrill,
    OrnamentMordent,

    // Repeats
    Segno,
    Coda,

    // String techniques
    StringsDownBow,
    StringsUpBow,
}

const CODEPOINTS: &[(MusicFontSymbol, u32)] = {
    use MusicFontSymbol::*;
    &[
        (Segno, 0xE047),
        (Coda, 0xE048),
        (GClef, 0xE050),
        (CClef, 0xE05C),
        (FClef, 0xE062),
        (UnpitchedPercussionClef1, 0xE069),
        (SixStringTabClef, 0xE06D),
        (FourStringTabClef, 0xE06E),
        (TimeSig0, 0xE080),
        (TimeSig1, 0xE081),
        (TimeSig2, 0xE082),
        (TimeSig3, 0xE083),
        (TimeSig4, 0xE084),
        (TimeSig5, 0xE085),
        (TimeSig6, 0xE086),
        (TimeSig7, 0xE087),
        (TimeSig8, 0xE088),
        (TimeSig9, 0xE089),
        (TimeSigCommon, 0xE08A),
        (TimeSigCutCommon, 0xE08B),
        (NoteheadDoubleWhole, 0xE0A0),
        (NoteheadWhole, 0xE0A2),
        (NoteheadHalf, 0xE0A3),
        (NoteheadBlack, 0xE0A4),
        (NoteheadXBlack, 0xE0A9),
        (NoteheadDiamondBlack, 0xE0DB),
        (AugmentationDot, 0xE1E7),
        (FlagEighthUp, 0xE240),
        (FlagEighthDown, 0xE241),
        (Flag16thUp, 0xE242),
        (Flag16thDown, 0xE243),
        (Flag32ndUp, 0xE244),
        (Flag32ndDown, 0xE245),
        (Flag64thUp, 0xE246),
        (Flag64thDown, 0xE247),
        (AccidentalFlat, 0xE260),
        (AccidentalNatural, 0xE261),
        (AccidentalSharp, 0xE262),
        (AccidentalDoubleSharp, 0xE263),
        (AccidentalDoubleFlat, 0xE264),
        (ArticAccentAbove, 0xE4A0),
        (ArticStaccatoAbove, 0xE4A2),
        (ArticTenutoAbove, 0xE4A4),
        (ArticMarcatoAbove, 0xE4AC),
        (FermataAbove, 0xE4C0),
        (RestWhole, 0xE4E3),
        (RestHalf, 0xE4E4),
        (RestQuarter, 0xE4E5),
        (RestEighth, 0xE4E6),
        (Rest16th, 0xE4E7),
        (Rest32nd, 0xE4E8),
        (Rest64th, 0xE4E9),
        (DynamicPiano, 0xE520),
        (DynamicMezzo, 0xE521),
        (DynamicForte, 0xE522),
        (DynamicSforzando, 0xE524),
        (DynamicZ, 0xE525),
        (OrnamentTrill, 0xE566),
        (OrnamentTurn, 0xE567),
        (OrnamentShortTrill, 0xE56C),
        (OrnamentMordent, 0xE56D),
        (StringsDownBow, 0xE610),
        (StringsUpBow, 0xE612),
    ]
};

impl MusicFontSymbol {
    /// SMuFL code point, or `None` for [`MusicFontSymbol::None`]
    pub fn codepoint(&self) -> Option<u32> {
        CODEPOINTS
            .iter()
            .find(|(symbol, _)| symbol == self)
            .map(|&(_, codepoint)| codepoint)
    }

    /// Look up a symbol by its SMuFL code point
    pub fn from_codepoint(codepoint: u32) -> Option<Self> {
        CODEPOINTS
            .iter()
            .find(|&&(_, cp)| cp == codepoint)
            .map(|&(symbol, _)| symbol)
    }

    pub fn is_none(&self) -> bool {
        *self == MusicFontSymbol::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::MusicFontSymbol::*;

    #[test]
    fn test_codepoints_match_smufl() {
        assert_eq!(GClef.codepoint(), Some(0xE050));
        assert_eq!(NoteheadBlack.codepoint(), Some(0xE0A4));
        assert_eq!(RestQuarter.codepoint(), Some(0xE4E5));
        assert_eq!(MusicFontSymbol::None.codepoint(), Option::None);
    }

    #[test]
    fn test_from_codepoint() {
        assert_eq!(MusicFontSymbol::from_codepoint(0xE262), Some(AccidentalSharp));
        assert_eq!(MusicFontSymbol::from_codepoint(0x41), Option::None);
    }

    #[test]
    fn test_codepoints_are_unique() {
        for (i, (a, cp_a)) in CODEPOINTS.iter().enumerate() {
            for (b, cp_b) in &CODEPOINTS[i + 1..] {
                assert_ne!(a, b, "symbol listed twice");
                assert_ne!(cp_a, cp_b, "{:?} and {:?} share a code point", a, b);
            }
        }
    }
}
