use phf::{Map, phf_map};

static ELEMENT_SYMBOLS: Map<u8, &'static str> = phf_map! {
    1u8 => "H", 2u8 => "He",
    3u8 => "Li", 4u8 => "Be", 5u8 => "B", 6u8 => "C", 7u8 => "N", 8u8 => "O", 9u8 => "F", 10u8 => "Ne",
    11u8 => "Na", 12u8 => "Mg", 13u8 => "Al", 14u8 => "Si", 15u8 => "P", 16u8 => "S", 17u8 => "Cl", 18u8 => "Ar",
    19u8 => "K", 20u8 => "Ca", 21u8 => "Sc", 22u8 => "Ti", 23u8 => "V", 24u8 => "Cr", 25u8 => "Mn", 26u8 => "Fe",
    27u8 => "Co", 28u8 => "Ni", 29u8 => "Cu", 30u8 => "Zn", 31u8 => "Ga", 32u8 => "Ge", 33u8 => "As", 34u8 => "Se",
    35u8 => "Br", 36u8 => "Kr",
    37u8 => "Rb", 38u8 => "Sr", 39u8 => "Y", 40u8 => "Zr", 41u8 => "Nb", 42u8 => "Mo", 43u8 => "Tc", 44u8 => "Ru",
    45u8 => "Rh", 46u8 => "Pd", 47u8 => "Ag", 48u8 => "Cd", 49u8 => "In", 50u8 => "Sn", 51u8 => "Sb", 52u8 => "Te",
    53u8 => "I", 54u8 => "Xe",
    55u8 => "Cs", 56u8 => "Ba", 57u8 => "La", 58u8 => "Ce", 59u8 => "Pr", 60u8 => "Nd", 61u8 => "Pm", 62u8 => "Sm",
    63u8 => "Eu", 64u8 => "Gd", 65u8 => "Tb", 66u8 => "Dy", 67u8 => "Ho", 68u8 => "Er", 69u8 => "Tm", 70u8 => "Yb",
    71u8 => "Lu", 72u8 => "Hf", 73u8 => "Ta", 74u8 => "W", 75u8 => "Re", 76u8 => "Os", 77u8 => "Ir", 78u8 => "Pt",
    79u8 => "Au", 80u8 => "Hg", 81u8 => "Tl", 82u8 => "Pb", 83u8 => "Bi", 84u8 => "Po", 85u8 => "At", 86u8 => "Rn",
    87u8 => "Fr", 88u8 => "Ra", 89u8 => "Ac", 90u8 => "Th", 91u8 => "Pa", 92u8 => "U", 93u8 => "Np", 94u8 => "Pu",
    95u8 => "Am", 96u8 => "Cm", 97u8 => "Bk", 98u8 => "Cf", 99u8 => "Es", 100u8 => "Fm", 101u8 => "Md", 102u8 => "No",
    103u8 => "Lr", 104u8 => "Rf", 105u8 => "Db", 106u8 => "Sg", 107u8 => "Bh", 108u8 => "Hs", 109u8 => "Mt", 110u8 => "Ds",
    111u8 => "Rg", 112u8 => "Cn", 113u8 => "Nh", 114u8 => "Fl", 115u8 => "Mc", 116u8 => "Lv", 117u8 => "Ts", 118u8 => "Og",
};

/// Highest atomic number with a known symbol.
pub const MAX_ATOMIC_NUMBER: u8 = 118;

/// Returns the element symbol for an atomic number, or `None` outside 1–118.
pub fn element_symbol(atomic_number: u8) -> Option<&'static str> {
    ELEMENT_SYMBOLS.get(&atomic_number).copied()
}

/// Looks up the atomic number for a symbol. Matching is case-sensitive.
pub fn atomic_number(symbol: &str) -> Option<u8> {
    let symbol = symbol.trim();
    ELEMENT_SYMBOLS
        .entries()
        .find(|(_, s)| **s == symbol)
        .map(|(z, _)| *z)
}
