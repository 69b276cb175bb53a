// Desenrola Direito - legal information content service
// Copyright (C) 2025 Desenrola Direito Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Startup dataset. The store has no persistence layer; every process start
//! rebuilds exactly this content.

use crate::store::ContentStore;
use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone, Utc};
use desenrola_core::models::{Article, Category, Solution};
use desenrola_core::utils::slug::slugify;
use tracing::info;

fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    // Dates in the editorial calendar are day-granular
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

struct SeedArticle<'a> {
    title: &'a str,
    slug: Option<&'a str>,
    excerpt: &'a str,
    content: &'a str,
    image_url: &'a str,
    publish_date: DateTime<Utc>,
    category_slug: &'a str,
    featured: bool,
}

/// Populate a fresh store with the site's launch content: five practice-area
/// categories, fourteen articles and four solution cards.
pub fn seed_content(store: &dyn ContentStore) -> Result<()> {
    seed_categories(store)?;
    seed_articles(store)?;
    seed_solutions(store)?;

    info!(
        categories = store.get_categories().len(),
        articles = store.get_articles().len(),
        solutions = store.get_solutions().len(),
        "Seeded content store"
    );

    Ok(())
}

fn seed_categories(store: &dyn ContentStore) -> Result<()> {
    let categories = [
        (
            "Direito do Consumidor",
            "direito-consumidor",
            "Saiba como resolver problemas com empresas, garantir seus direitos nas compras e obter ressarcimento por produtos defeituosos.",
            "fa-gavel",
        ),
        (
            "Direito Trabalhista",
            "direito-trabalhista",
            "Conheça seus direitos no ambiente de trabalho, rescisão, horas extras, assédio e mais. Saiba quando você pode reivindicar.",
            "fa-briefcase",
        ),
        (
            "Direito Imobiliário",
            "direito-imobiliario",
            "Tudo sobre contratos de aluguel, compra e venda de imóveis, financiamentos e como evitar armadilhas neste setor.",
            "fa-home",
        ),
        (
            "Direito Familiar",
            "direito-familiar",
            "Orientações sobre divórcio, pensão alimentícia, guarda de filhos, inventário e outros assuntos relacionados à família.",
            "fa-users",
        ),
        (
            "Direito Previdenciário",
            "direito-previdenciario",
            "Informações sobre aposentadoria, benefícios, auxílios e como garantir seus direitos junto ao INSS.",
            "fa-shield-alt",
        ),
    ];

    for (name, slug, description, icon) in categories {
        let mut category = Category::new(name.to_string(), slug.to_string());
        category.description = Some(description.to_string());
        category.icon_name = Some(icon.to_string());

        store
            .create_category(category)
            .with_context(|| format!("Failed to seed category '{}'", slug))?;
    }

    Ok(())
}

fn seed_articles(store: &dyn ContentStore) -> Result<()> {
    for entry in launch_articles() {
        let category = store
            .get_category_by_slug(entry.category_slug)
            .with_context(|| format!("Unknown seed category '{}'", entry.category_slug))?;
        let category_id = category.id.context("Seed category has no id")?;

        let slug = match entry.slug {
            Some(slug) => slug.to_string(),
            None => slugify(entry.title),
        };

        let mut article = Article::new(
            entry.title.to_string(),
            slug,
            entry.excerpt.to_string(),
            entry.content.trim().to_string(),
            entry.publish_date,
            category_id,
        );
        article.image_url = Some(entry.image_url.to_string());
        article.featured = entry.featured;

        store
            .create_article(article)
            .with_context(|| format!("Failed to seed article '{}'", entry.title))?;
    }

    Ok(())
}

fn seed_solutions(store: &dyn ContentStore) -> Result<()> {
    let solutions = [
        (
            "Consultoria jurídica online",
            "Tire suas dúvidas com especialistas sem sair de casa.",
            "https://images.unsplash.com/photo-1450101499163-c8848c66ca85",
            "/legal-consultation",
            "Encontre um Advogado",
        ),
        (
            "Modelos de documentos",
            "Acesse modelos prontos de petições, contratos e outros documentos.",
            "https://images.unsplash.com/photo-1586281380117-5a60ae2050cc",
            "/contact",
            "Baixar modelos",
        ),
        (
            "Calculadoras jurídicas",
            "Calcule verbas rescisórias, pensão alimentícia e outros valores.",
            "https://images.unsplash.com/photo-1588702547923-7093a6c3ba33",
            "/calculators",
            "Usar calculadoras",
        ),
        (
            "Comunidade de apoio",
            "Compartilhe experiências e receba conselhos de outras pessoas.",
            "https://images.unsplash.com/photo-1491438590914-bc09fcaaf77a",
            "/contact",
            "Participar",
        ),
    ];

    for (title, description, image_url, link, link_text) in solutions {
        let mut solution = Solution::new(
            title.to_string(),
            description.to_string(),
            link.to_string(),
            link_text.to_string(),
        );
        solution.image_url = Some(image_url.to_string());

        store
            .create_solution(solution)
            .with_context(|| format!("Failed to seed solution '{}'", title))?;
    }

    Ok(())
}

fn launch_articles() -> Vec<SeedArticle<'static>> {
    vec![
        SeedArticle {
            title: "Como cancelar compras online: Guia prático",
            slug: Some("como-cancelar-compras-online"),
            excerpt: "Saiba seus direitos de arrependimento em compras pela internet e como proceder para cancelamentos sem dor de cabeça.",
            content: r#"
# Como cancelar compras online: Guia prático

Você fez uma compra pela internet e se arrependeu? O Código de Defesa do Consumidor (CDC) garante o direito de arrependimento para compras realizadas fora do estabelecimento comercial.

## O direito de arrependimento

O artigo 49 do CDC estabelece que o consumidor pode desistir da compra no prazo de 7 dias, contados a partir do recebimento do produto, independentemente do motivo.

## Como proceder para cancelar

1. **Entre em contato com a empresa**: faça o pedido preferencialmente por escrito, guardando o protocolo de atendimento.
2. **Prazo legal**: o pedido deve ser feito em até 7 dias após o recebimento.
3. **Devolução do valor**: a empresa deve devolver integralmente qualquer valor pago, inclusive frete.
4. **Custos de devolução**: em regra, são de responsabilidade da empresa.

## Se a empresa se recusar

- Guarde todos os comprovantes da tentativa de cancelamento
- Formalize uma reclamação no Procon
- Registre uma queixa no site consumidor.gov.br
- Em último caso, procure o Juizado Especial Cível

Conhecer seus direitos é o primeiro passo para garantir que sejam respeitados!
"#,
            image_url: "https://images.unsplash.com/photo-1589216996730-15c1486d8590",
            publish_date: date(2025, 5, 12),
            category_slug: "direito-consumidor",
            featured: true,
        },
        SeedArticle {
            title: "Produtos com defeito: Como exigir seus direitos",
            slug: Some("produtos-com-defeito"),
            excerpt: "Guia completo sobre como proceder quando um produto apresenta defeito, incluindo prazos e opções de reparação.",
            content: r#"
# Produtos com defeito: Como exigir seus direitos

Comprou um produto que apresentou defeito? O Código de Defesa do Consumidor estabelece regras claras para proteger o consumidor.

## Prazos para reclamação

- **Produtos não duráveis**: 30 dias (alimentos, cosméticos, etc.)
- **Produtos duráveis**: 90 dias (eletrodomésticos, móveis, etc.)

Os prazos contam da entrega efetiva para vícios aparentes, ou da descoberta do problema para vícios ocultos.

## As três alternativas legais

Quando o fornecedor não sana o problema em 30 dias, o consumidor pode exigir, à sua escolha:

1. **Substituição do produto**
2. **Abatimento proporcional do preço**
3. **Devolução do valor pago, com correção monetária**

## Garantias legais e contratuais

A garantia legal é obrigatória e independe de termo escrito. A garantia contratual é complementar e se soma a ela, nunca a substitui.
"#,
            image_url: "https://images.unsplash.com/photo-1625225230517-7426c1be750c",
            publish_date: date(2025, 5, 1),
            category_slug: "direito-consumidor",
            featured: false,
        },
        SeedArticle {
            title: "Demissão sem justa causa: O que você precisa saber",
            slug: Some("demissao-sem-justa-causa"),
            excerpt: "Entenda seus direitos durante uma demissão sem justa causa, quais verbas rescisórias você tem direito e como calcular.",
            content: r#"
# Demissão sem justa causa: O que você precisa saber

A demissão sem justa causa ocorre quando o empregador encerra o contrato sem que o funcionário tenha cometido falta grave.

## Quais são seus direitos?

- **Saldo de salário**: dias trabalhados no mês da rescisão
- **Aviso prévio**: 30 dias + 3 dias por ano trabalhado (limitado a 90 dias)
- **Férias vencidas e proporcionais**: com acréscimo de 1/3
- **13º salário proporcional**
- **FGTS**: saque do saldo + multa de 40% sobre o total depositado
- **Seguro-desemprego**: se atender aos requisitos legais

## Prazos para pagamento

A quitação das verbas rescisórias deve ocorrer em até 10 dias após o término do contrato.

## Em caso de problemas

Busque o sindicato da categoria, registre denúncia na Superintendência Regional do Trabalho ou entre com ação na Justiça do Trabalho. A homologação da rescisão não impede o questionamento posterior de direitos não pagos.
"#,
            image_url: "https://images.unsplash.com/photo-1590087851092-908fd5cc6c67",
            publish_date: date(2025, 5, 10),
            category_slug: "direito-trabalhista",
            featured: true,
        },
        SeedArticle {
            title: "Assédio moral no trabalho: Como identificar e agir",
            slug: Some("assedio-moral-trabalho"),
            excerpt: "Aprenda a identificar situações de assédio moral, seus direitos como trabalhador e as medidas legais para se proteger.",
            content: r#"
# Assédio moral no trabalho: Como identificar e agir

O assédio moral consiste na exposição repetitiva do trabalhador a situações humilhantes e constrangedoras, capazes de ofender a dignidade ou a integridade psíquica.

## Como identificar

- Críticas constantes de forma desrespeitosa
- Isolamento do funcionário
- Atribuição de tarefas impossíveis ou excessivas
- Ridicularização pública e propagação de boatos
- Ameaças veladas ou explícitas

## O que fazer

1. **Registre os fatos**: datas, horários, locais e pessoas presentes
2. **Guarde provas**: e-mails, mensagens, testemunhas
3. **Informe a empresa**: ouvidoria ou RH
4. **Busque ajuda médica e psicológica** para documentar danos à saúde

## Medidas legais

Comprovado o assédio, é possível pedir a rescisão indireta do contrato e buscar indenização por danos morais na Justiça do Trabalho. A linha que separa a cobrança legítima do assédio está no respeito à dignidade humana.
"#,
            image_url: "https://images.unsplash.com/photo-1517502884422-41eaead166d4",
            publish_date: date(2025, 4, 28),
            category_slug: "direito-trabalhista",
            featured: false,
        },
        SeedArticle {
            title: "Aluguel: 5 cláusulas abusivas que você deve ficar atento",
            slug: Some("clausulas-abusivas-aluguel"),
            excerpt: "Descubra quais cláusulas são consideradas abusivas em contratos de aluguel e como se proteger de armadilhas contratuais.",
            content: r#"
# Aluguel: 5 cláusulas abusivas que você deve ficar atento

A Lei do Inquilinato (Lei nº 8.245/91) e o Código de Defesa do Consumidor protegem o locatário contra cláusulas ilegais.

## 1. Multa por rescisão antecipada superior a 3 aluguéis

A multa por rescisão antecipada não pode exceder o valor de três meses de aluguel.

## 2. Transferência de todos os reparos para o inquilino

O locador responde pelos reparos estruturais e problemas anteriores à locação; ao inquilino cabem apenas pequenos reparos de uso normal.

## 3. Reajuste em período inferior a 12 meses

O aluguel só pode ser reajustado após 12 meses de contrato.

## 4. Proibição absoluta de sublocação

A sublocação é permitida mediante consentimento prévio e escrito do locador.

## 5. Renúncia antecipada ao direito de preferência

O inquilino tem preferência na compra do imóvel nas mesmas condições oferecidas a terceiros.

Cláusulas abusivas são nulas e podem ser contestadas judicialmente sem invalidar o restante do contrato.
"#,
            image_url: "https://images.unsplash.com/photo-1556156653-e5a7c69cc263",
            publish_date: date(2025, 5, 5),
            category_slug: "direito-imobiliario",
            featured: true,
        },
        SeedArticle {
            title: "O que verificar antes de assinar um contrato de aluguel",
            slug: Some("verificar-antes-contrato-aluguel"),
            excerpt: "Checklist completo do que verificar antes de alugar um imóvel, cláusulas importantes e como evitar problemas futuros.",
            content: r#"
# O que verificar antes de assinar um contrato de aluguel

Alugar um imóvel requer atenção a diversos detalhes para evitar dores de cabeça futuras.

## Inspeção do imóvel

Verifique o estado geral, instalações elétricas e hidráulicas, infiltrações, portas e janelas. Faça um relatório fotográfico detalhado do estado atual.

## Análise do contrato

1. Identificação completa das partes
2. Descrição detalhada do imóvel
3. Valor do aluguel e forma de reajuste
4. Prazo de locação
5. Encargos: quem paga IPTU, condomínio, etc.
6. Condições para rescisão antecipada

## Garantias locatícias

O proprietário pode exigir apenas UMA das garantias: caução (até 3 meses de aluguel), fiador, seguro-fiança ou título de capitalização.

## Alertas importantes

- Desconfie de valores muito abaixo do mercado
- Nunca pague antes de assinar o contrato
- Verifique se quem aluga é realmente o proprietário
- Negocie cláusulas abusivas antes de assinar
"#,
            image_url: "https://images.unsplash.com/photo-1464082354059-27db6ce50048",
            publish_date: date(2025, 4, 20),
            category_slug: "direito-imobiliario",
            featured: false,
        },
        SeedArticle {
            title: "Divórcio consensual: Como fazer sem gastar muito",
            slug: Some("divorcio-consensual-economico"),
            excerpt: "Entenda como funciona o divórcio consensual, quais documentos são necessários e como economizar nos procedimentos.",
            content: r#"
# Divórcio consensual: Como fazer sem gastar muito

O divórcio consensual é a dissolução do casamento quando ambos os cônjuges estão de acordo. É mais rápido, menos custoso e menos desgastante que um divórcio litigioso.

## Opções para realizar

### Cartório (extrajudicial)

Possível quando não há filhos menores ou incapazes e há consenso total. Exige certidão de casamento atualizada, documentos pessoais e escritura elaborada por advogado. Tempo médio: 1 a 2 semanas.

### Via judicial, mas consensual

Necessária quando há filhos menores ou incapazes. Tempo médio: 1 a 3 meses.

## Como economizar

1. Defina os termos antes de procurar profissionais
2. Considere a Defensoria Pública se a renda familiar for de até 3 salários mínimos
3. Busque escritórios-modelo de faculdades de Direito
4. Compare honorários advocatícios

## Pontos de atenção

A guarda compartilhada é a regra no Brasil, salvo quando não for benéfica para a criança. Bens adquiridos antes do casamento ou por herança não entram na partilha, exceto no regime de comunhão universal.
"#,
            image_url: "https://images.unsplash.com/photo-1575505586569-8a0f335b5653",
            publish_date: date(2025, 4, 25),
            category_slug: "direito-familiar",
            featured: true,
        },
        SeedArticle {
            title: "Aposentadoria por tempo de contribuição: Novas regras após a reforma",
            slug: Some("aposentadoria-tempo-contribuicao"),
            excerpt: "Entenda as mudanças nas regras de aposentadoria após a reforma previdenciária e quais são suas opções para se aposentar.",
            content: r#"
# Aposentadoria por tempo de contribuição: Novas regras após a reforma

A reforma da Previdência, aprovada em 2019, trouxe mudanças significativas nas regras para aposentadoria.

## O fim da aposentadoria por tempo de contribuição pura

Agora, além do tempo mínimo de contribuição, também é exigida uma idade mínima:

- **Homens**: 65 anos de idade + 20 anos de contribuição
- **Mulheres**: 62 anos de idade + 15 anos de contribuição

## Regras de transição

Para quem já estava no mercado de trabalho, existem cinco regras:

1. **Regra dos pontos (86/96)**: soma de idade e tempo de contribuição
2. **Idade mínima progressiva**: aumento de 6 meses a cada ano
3. **Pedágio de 50%**: para quem estava a até 2 anos do tempo mínimo
4. **Pedágio de 100%**: com idade mínima de 60/57 anos
5. **Idade reduzida para professor**: redução de 5 anos na idade mínima

## Dicas importantes

Verifique seu tempo de contribuição no Meu INSS, procure períodos não computados e simule diferentes cenários antes de decidir. Contribuir por mais tempo pode aumentar o valor do benefício.
"#,
            image_url: "https://images.unsplash.com/photo-1562240020-ce31ccb0fa7d",
            publish_date: date(2025, 5, 8),
            category_slug: "direito-previdenciario",
            featured: true,
        },
        // Slugs are unique lookup keys, so this follow-up derives its slug
        // from the full title instead of reusing the short one above.
        SeedArticle {
            title: "Aposentadoria por tempo de contribuição: Requisitos e cálculos atualizados",
            slug: None,
            excerpt: "Guia completo sobre as regras de aposentadoria por tempo de contribuição após a reforma da previdência, com exemplos de cálculos e dicas.",
            content: r#"
# Aposentadoria por tempo de contribuição: Requisitos e cálculos atualizados

Após a Reforma da Previdência (Emenda Constitucional nº 103/2019), as regras para concessão do benefício mudaram, incluindo regras de transição para quem já estava no mercado de trabalho.

## Como calcular o valor da aposentadoria

O valor será de 60% da média de todos os salários de contribuição desde julho de 1994, com acréscimo de 2% para cada ano que exceder 20 anos de contribuição (homens) ou 15 anos (mulheres).

### Exemplos

- Mulher com 30 anos de contribuição: 60% + 30% = 90% da média
- Homem com 40 anos de contribuição: 60% + 40% = 100% da média

## Documentos necessários

- Documentos pessoais (RG, CPF)
- Carteira de Trabalho
- PIS/PASEP/NIT
- Comprovantes de recolhimento para períodos como autônomo

## Como solicitar

O pedido pode ser feito pelo aplicativo ou site Meu INSS, ou pela Central 135. O prazo legal para análise é de 45 dias. Se o pedido for negado, cabe recurso ao Conselho de Recursos da Previdência Social em 30 dias.

O planejamento previdenciário tornou-se ainda mais importante: conheça seus direitos e faça simulações periódicas.
"#,
            image_url: "https://images.unsplash.com/photo-1574280363402-2f672940b871",
            publish_date: date(2023, 4, 10),
            category_slug: "direito-previdenciario",
            featured: true,
        },
        SeedArticle {
            title: "Contrato de aluguel: Como evitar armadilhas e proteger seus direitos",
            slug: Some("contrato-de-aluguel-evitar-armadilhas"),
            excerpt: "Tudo o que você precisa saber antes de assinar um contrato de locação, incluindo cláusulas abusivas, garantias e direitos do inquilino.",
            content: r#"
# Contrato de aluguel: Como evitar armadilhas e proteger seus direitos

A Lei do Inquilinato (Lei nº 8.245/1991) regulamenta as locações de imóveis urbanos, estabelecendo direitos e deveres para proprietários e inquilinos.

## Antes de assinar

- Identificação completa das partes
- Descrição detalhada do imóvel, com laudo fotográfico anexo
- Prazo da locação e critérios de reajuste
- Especificação de quem paga IPTU, condomínio e contas de consumo

## Cláusulas abusivas

- Multa por atraso superior a 10% do débito
- Renúncia a direitos fundamentais do inquilino
- Transferência ao inquilino de despesas extraordinárias de condomínio
- Exigência de garantias cumulativas (a lei permite apenas uma)

## Direitos fundamentais do inquilino

1. Preferência na compra do imóvel
2. Devolução antecipada com multa proporcional
3. Revisão do valor do aluguel a cada três anos
4. Reparos urgentes por conta do proprietário
5. Prorrogação automática ao fim do prazo contratual

A prevenção através de um contrato bem negociado é sempre mais vantajosa que a solução de conflitos após sua ocorrência.
"#,
            image_url: "https://images.unsplash.com/photo-1560518883-ce09059eeffa",
            publish_date: date(2023, 6, 15),
            category_slug: "direito-imobiliario",
            featured: false,
        },
        SeedArticle {
            title: "Compras pela internet: Direitos do consumidor e como evitar fraudes",
            slug: Some("compras-internet-direitos-evitar-fraudes"),
            excerpt: "Aprenda quais são seus direitos nas compras online, como identificar sites confiáveis e o que fazer em caso de problemas com sua compra.",
            content: r#"
# Compras pela internet: Direitos do consumidor e como evitar fraudes

O comércio eletrônico brasileiro cresceu mais de 70% nos últimos anos, e com ele os problemas com fraudes e sites não confiáveis.

## Direitos básicos nas compras online

### Direito de arrependimento

O artigo 49 do CDC garante 7 dias, a contar do recebimento do produto, para desistir da compra sem justificar o motivo. A empresa não pode cobrar taxa pela devolução e deve ressarcir o valor integral, incluindo frete.

### Informações claras e precisas

O site deve exibir características essenciais do produto, preço total, prazo de entrega e identificação completa do fornecedor (CNPJ, endereço, telefone).

### Cumprimento da oferta

Tudo o que é anunciado deve ser cumprido: promoções divulgadas, prazos de entrega e características dos produtos vinculam o fornecedor.

## Como evitar fraudes

- Verifique o CNPJ da loja na Receita Federal
- Desconfie de preços muito abaixo do mercado
- Prefira pagamento com cartão, que permite contestação
- Pesquise reclamações no Procon e no consumidor.gov.br
"#,
            image_url: "https://images.unsplash.com/photo-1563013544-824ae1b704d3",
            publish_date: date(2023, 5, 3),
            category_slug: "direito-consumidor",
            featured: true,
        },
        SeedArticle {
            title: "Legítima defesa: Quando é permitido se defender e quais os limites",
            slug: Some("legitima-defesa-limites-legais"),
            excerpt: "Entenda os requisitos da legítima defesa, quando ela pode ser invocada e quais os limites impostos pela lei para que não se torne excesso punível.",
            content: r#"
# Legítima defesa: Quando é permitido se defender e quais os limites

A legítima defesa é uma das causas excludentes de ilicitude previstas no Código Penal.

## O que é legítima defesa?

Conforme o artigo 25 do Código Penal:

> "Entende-se em legítima defesa quem, usando moderadamente dos meios necessários, repele injusta agressão, atual ou iminente, a direito seu ou de outrem."

## Requisitos

1. **Agressão injusta**, atual ou iminente
2. **Direito próprio ou de terceiro** sob ameaça
3. **Meios necessários** usados com moderação

Qualquer direito juridicamente protegido pode ser defendido, incluindo o patrimônio e a honra, mas a proporcionalidade entre o bem defendido e o meio empregado é fator crucial.

## O excesso punível

Quem ultrapassa os limites da moderação responde pelo excesso, doloso ou culposo. A defesa deve cessar quando cessa a agressão.
"#,
            image_url: "https://images.unsplash.com/photo-1589829545856-d10d557cf95f",
            publish_date: date(2023, 3, 22),
            category_slug: "direito-familiar",
            featured: false,
        },
        SeedArticle {
            title: "Jornada de trabalho: Horas extras, banco de horas e direitos do trabalhador",
            slug: Some("jornada-trabalho-horas-extras-direitos"),
            excerpt: "Um guia completo sobre jornada de trabalho, pagamento de horas extras, funcionamento do banco de horas e os direitos dos trabalhadores após a reforma trabalhista.",
            content: r#"
# Jornada de trabalho: Horas extras, banco de horas e direitos do trabalhador

A Constituição Federal estabelece jornada normal não superior a 8 horas diárias e 44 semanais, facultada a compensação de horários mediante acordo ou convenção coletiva.

## Horas extras

- Limite de 2 horas extras por dia
- Adicional mínimo de 50% sobre a hora normal
- Em domingos e feriados, o adicional sobe para 100%

## Banco de horas

A Reforma Trabalhista (Lei 13.467/2017) permitiu o banco de horas por acordo individual escrito, com compensação no período máximo de 6 meses; por acordo coletivo, em até 1 ano.

## Intervalos

- Jornadas acima de 6 horas: intervalo mínimo de 30 minutos (podendo chegar a 2 horas)
- Entre duas jornadas: mínimo de 11 horas consecutivas de descanso

## O que fazer em caso de descumprimento

Registre a jornada efetivamente cumprida, reúna provas (cartões de ponto, e-mails, testemunhas) e procure o sindicato ou a Justiça do Trabalho.
"#,
            image_url: "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40",
            publish_date: date(2023, 7, 14),
            category_slug: "direito-trabalhista",
            featured: false,
        },
        SeedArticle {
            title: "Divórcio no Brasil: Procedimentos, direitos e divisão de bens",
            slug: Some("divorcio-brasil-procedimentos-direitos"),
            excerpt: "Guia completo sobre os procedimentos de divórcio no Brasil, incluindo modalidades, divisão de bens, guarda dos filhos e pensão alimentícia.",
            content: r#"
# Divórcio no Brasil: Procedimentos, direitos e divisão de bens

A Emenda Constitucional nº 66/2010 simplificou o procedimento, eliminando a separação judicial prévia e os prazos mínimos de separação de fato.

## Evolução histórica

- **Até 1977**: o casamento era indissolúvel no Brasil
- **Lei do Divórcio (1977)**: exigia separação judicial prévia por 3 anos
- **Lei 11.441/2007**: permitiu o divórcio em cartório para casos consensuais
- **EC 66/2010**: instituiu o divórcio direto

## Divisão de bens por regime

- **Comunhão parcial**: divide-se o que foi adquirido na constância do casamento
- **Comunhão universal**: divide-se todo o patrimônio, inclusive o anterior
- **Separação total**: cada um conserva seus bens

## Guarda dos filhos e pensão

A guarda compartilhada é a regra. A pensão alimentícia considera as necessidades de quem recebe e as possibilidades de quem paga.

Buscar soluções consensuais simplifica os procedimentos e contribui para uma coparentalidade saudável após o fim do vínculo conjugal.
"#,
            image_url: "https://images.unsplash.com/photo-1470790376778-a9fbc86d70e2",
            publish_date: date(2023, 2, 9),
            category_slug: "direito-familiar",
            featured: true,
        },
    ]
}
