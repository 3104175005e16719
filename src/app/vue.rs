// src/app/vue.rs
//
// Vue (UI egui) : natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran + barre d’expression (Enter évalue) + pavé + touches scientifiques
// - Aucune logique ici : chaque clic appelle une action de etat.rs

use eframe::egui;

use super::etat::{AppCalc, FonctionClavier, OpClavier};
use super::reglages::ModeAngle;

/// Touches du pavé (hors fonctions scientifiques).
#[derive(Clone, Copy, Debug)]
enum Touche {
    Chiffre(char),
    Op(OpClavier),
    Egal,
    Effacer,
    Signe,
    Pourcent,
}

impl Touche {
    fn libelle(self) -> String {
        match self {
            Touche::Chiffre(c) => c.to_string(),
            Touche::Op(op) => op.symbole().to_string(),
            Touche::Egal => "=".into(),
            Touche::Effacer => "C".into(),
            Touche::Signe => "±".into(),
            Touche::Pourcent => "%".into(),
        }
    }
}

/// Disposition du pavé, ligne par ligne.
const PAVE: &[&[Touche]] = &[
    &[
        Touche::Effacer,
        Touche::Signe,
        Touche::Pourcent,
        Touche::Op(OpClavier::Divise),
    ],
    &[
        Touche::Chiffre('7'),
        Touche::Chiffre('8'),
        Touche::Chiffre('9'),
        Touche::Op(OpClavier::Fois),
    ],
    &[
        Touche::Chiffre('4'),
        Touche::Chiffre('5'),
        Touche::Chiffre('6'),
        Touche::Op(OpClavier::Moins),
    ],
    &[
        Touche::Chiffre('1'),
        Touche::Chiffre('2'),
        Touche::Chiffre('3'),
        Touche::Op(OpClavier::Plus),
    ],
    &[Touche::Chiffre('0'), Touche::Chiffre('.'), Touche::Egal],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice");
                ui.add_space(6.0);

                self.ui_ecran(ui);

                ui.add_space(8.0);
                self.ui_expression(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_pave(ui);

                ui.add_space(8.0);
                self.ui_fonctions(ui);

                ui.add_space(8.0);
                ui.separator();

                self.ui_reglages(ui);
            });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(&self.affichage).monospace().size(32.0));
                    if let Some(op) = self.operation() {
                        ui.label(egui::RichText::new(op.symbole()).monospace().weak());
                    }
                });
            });
    }

    fn ui_expression(&mut self, ui: &mut egui::Ui) {
        ui.label("Expression :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.expression)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2+3*4, sqrt(16)+1, pow(2,10), max(pi,e)")
                .id_salt("expression_edit")
                .code_editor(),
        );

        if self.focus_expression {
            resp.request_focus();
            self.focus_expression = false;
        }

        // Enter : un TextEdit singleline perd le focus à la validation.
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.lost_focus() && enter {
            self.evaluer_expression();
        }

        if !self.erreur.is_empty() {
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for &touche in *ligne {
                        if Self::bouton(ui, &touche.libelle()) {
                            self.appuyer(touche);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_fonctions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for f in FonctionClavier::TOUTES {
                if Self::bouton(ui, f.libelle()) {
                    self.touche_fonction(f);
                }
            }
        });
    }

    fn ui_reglages(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Réglages")
            .default_open(false)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Angles (pavé) :");
                    ui.radio_value(&mut self.reglages.angles, ModeAngle::Degres, "degrés");
                    ui.radio_value(&mut self.reglages.angles, ModeAngle::Radians, "radians");
                });

                ui.horizontal(|ui| {
                    ui.label("Largeur écran :");
                    let mut l = self.reglages.largeur_affichage as u32;
                    let resp = ui.add(
                        egui::DragValue::new(&mut l)
                            .speed(1)
                            .range(8..=24)
                            .suffix(" car."),
                    );
                    if resp.changed() {
                        self.reglages.set_largeur_affichage(l as usize);
                    }
                });

                ui.horizontal(|ui| {
                    ui.label("Décimales (exposant) :");
                    let mut d = self.reglages.chiffres_exposant as u32;
                    let resp = ui.add(egui::DragValue::new(&mut d).speed(1).range(1..=15));
                    if resp.changed() {
                        self.reglages.set_chiffres_exposant(d as usize);
                    }
                });
            });
    }

    fn appuyer(&mut self, touche: Touche) {
        match touche {
            Touche::Chiffre(c) => self.touche_chiffre(c),
            Touche::Op(op) => self.touche_operation(op),
            Touche::Egal => self.touche_egal(),
            Touche::Effacer => self.effacer(),
            Touche::Signe => self.basculer_signe(),
            Touche::Pourcent => self.pourcentage(),
        }
    }

    fn bouton(ui: &mut egui::Ui, label: &str) -> bool {
        ui.add_sized([56.0, 40.0], egui::Button::new(label))
            .clicked()
    }
}
