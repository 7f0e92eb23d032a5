//! Fixed informational content

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FabricCategory {
    pub name: &'static str,
    pub description: &'static str,
}

pub const ELASTICITY_CATEGORIES: &[FabricCategory] = &[
    FabricCategory {
        name: "Rendah",
        description: "Sulit melar, kembali ke bentuk asli perlahan. Contoh: Linen, Katun (tenun), Denim. Cocok untuk struktur kuat.",
    },
    FabricCategory {
        name: "Sedang",
        description: "Melar sedikit, nyaman digerakkan. Contoh: Katun (rajut), Wol, Rayon. Fleksibel untuk pakaian sehari-hari.",
    },
    FabricCategory {
        name: "Tinggi",
        description: "Sangat melar, mengikuti bentuk tubuh. Contoh: Spandex/Lycra, Karet, Kain jaring. Ideal untuk olahraga dan pakaian ketat.",
    },
];

pub const TEXTURE_CATEGORIES: &[FabricCategory] = &[
    FabricCategory {
        name: "Halus",
        description: "Permukaan licin dan rata. Contoh: Sutra, Katun Sateen. Nyaman di kulit.",
    },
    FabricCategory {
        name: "Licin",
        description: "Cenderung tidak menempel, mudah jatuh. Contoh: Poliester, Nilon. Tahan air.",
    },
    FabricCategory {
        name: "Lembut",
        description: "Nyaman disentuh, sering berbulu halus. Contoh: Wol, Fleece, Beludru. Hangat dan empuk.",
    },
    FabricCategory {
        name: "Berpori",
        description: "Ada rongga kecil, sirkulasi udara baik. Contoh: Katun, Linen, Jaring. Menyerap keringat.",
    },
    FabricCategory {
        name: "Kasar",
        description: "Permukaan tidak rata, terasa bertekstur. Contoh: Denim, Goni, Corduroy. Kuat dan tahan lama.",
    },
];

pub const SVM_ADVANTAGES: &[&str] = &[
    "Efektif untuk data dengan dimensi tinggi",
    "Akurat untuk klasifikasi non-linear",
    "Tahan terhadap overfitting",
    "Menggunakan kernel RBF untuk pola kompleks",
];

pub const SVM_APPLICATIONS: &[&str] = &[
    "Identifikasi jenis bahan berdasarkan sifat fisik",
    "Klasifikasi kualitas material",
    "Prediksi aplikasi penggunaan",
    "Quality control dalam produksi",
];
