//! # Product Catalog
//!
//! The fixed distributor catalog and the product-family rules that hang off
//! product names.
//!
//! The catalog is advisory: every code path accepts unknown product names,
//! which simply never match an exemption or a family rule. What must stay
//! exact are the spellings, because tax exemptions match on them.

/// Every product the sales team quotes, as it appears on documents.
pub const PRODUCT_NAMES: &[&str] = &[
    "Lonil de PVC",
    "Lonil KP",
    "Lonil Inflável KP",
    "Encerado",
    "Duramax",
    "Lonaleve",
    "Sider Truck Teto",
    "Sider Truck Lateral",
    "Capota Marítima",
    "Night&Day Plus 1,40",
    "Night&Day Plus 2,00",
    "Night&Day Listrado",
    "Vitro 0,40",
    "Vitro 0,50",
    "Vitro 0,60",
    "Vitro 0,80",
    "Vitro 1,00",
    "Durasol",
    "Poli Light",
    "Sunset",
    "Tenda",
    "Tenda 2,3x2,3",
    "Acrylic",
    "Agora",
    "Lona Galpão Teto",
    "Lona Galpão Lateral",
    "Tela de Sombreamento 30%",
    "Tela de Sombreamento 50%",
    "Tela de Sombreamento 80%",
    "Geomembrana RV 0,42",
    "Geomembrana RV 0,80",
    "Geomembrana RV 1,00",
    "Geomembrana ATX 0,80",
    "Geomembrana ATX 1,00",
    "Geomembrana ATX 1,50",
    "Geo Bio s/ reforço 1,00",
    "Geo Bio s/ reforço 1,20",
    "Geo Bio s/ reforço 1,50",
    "Geo Bio c/ reforço 1,20",
    "Cristal com Pó",
    "Cristal com Papel",
    "Cristal Colorido",
    "Filme Liso",
    "Filme Kamurcinha",
    "Filme Verniz",
    "Block Lux",
    "Filme Dimension",
    "Filme Sarja",
    "Filme Emborrachado",
    "Filme Pneumático",
    "Adesivo Branco Brilho 0,08",
    "Adesivo Branco Brilho 0,10",
    "Adesivo Branco Fosco 0,10",
    "Adesivo Preto Brilho 0,08",
    "Adesivo Preto Fosco 0,10",
    "Adesivo Transparente Brilho 0,08",
    "Adesivo Transparente Jateado 0,08",
    "Adesivo Mascara Brilho 0,08",
    "Adesivo Aço Escovado 0,08",
];

/// Product families sold by thickness. A roll item of one of these families
/// must carry a thickness (mm); everything else must not require one.
pub const THICKNESS_PREFIXES: &[&str] = &[
    "Geomembrana",
    "Geo",
    "Vitro",
    "Cristal",
    "Filme",
    "Adesivo",
    "Block Lux",
];

/// Whether a roll of this product is specified by thickness.
pub fn requires_thickness(product: &str) -> bool {
    THICKNESS_PREFIXES
        .iter()
        .any(|prefix| product.starts_with(prefix))
}

/// Whether the name is in the fixed catalog.
pub fn is_catalog_product(product: &str) -> bool {
    PRODUCT_NAMES.contains(&product)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_thickness_by_prefix() {
        assert!(requires_thickness("Geomembrana RV 0,42"));
        assert!(requires_thickness("Geo Bio s/ reforço 1,20"));
        assert!(requires_thickness("Vitro 0,60"));
        assert!(requires_thickness("Filme Liso"));
        assert!(requires_thickness("Adesivo Branco Brilho 0,08"));
        assert!(requires_thickness("Block Lux"));
    }

    #[test]
    fn test_no_thickness_for_plain_tarps() {
        assert!(!requires_thickness("Encerado"));
        assert!(!requires_thickness("Lonil de PVC"));
        assert!(!requires_thickness("Capota Marítima"));
        assert!(!requires_thickness("Tela de Sombreamento 50%"));
    }

    #[test]
    fn test_catalog_membership() {
        assert!(is_catalog_product("Encerado"));
        assert!(is_catalog_product("Adesivo Aço Escovado 0,08"));
        assert!(!is_catalog_product("Lona Mágica"));
        assert!(!is_catalog_product(""));
    }
}
